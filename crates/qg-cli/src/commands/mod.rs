pub mod cast;
pub mod convert;
pub mod cycle;
pub mod pillars;
pub mod session;
pub mod terms;
pub mod year;

use clap::Args;
use serde::Serialize;

use qg_calendar::{CalendarConfig, ZiSect};

/// Calendar options shared by the resolving commands.
#[derive(Args, Debug, Clone)]
pub struct CalendarArgs {
    /// Late 子 convention: next-day or same-day
    #[arg(long, default_value = "next-day")]
    pub sect: String,

    /// First year searched
    #[arg(long, default_value_t = qg_calendar::SearchEpoch::DEFAULT_START)]
    pub from: i32,

    /// Last year searched
    #[arg(long, default_value_t = qg_calendar::SearchEpoch::DEFAULT_END)]
    pub to: i32,
}

impl CalendarArgs {
    /// Calendar configuration for these options.
    pub fn config(&self) -> Result<CalendarConfig, String> {
        Ok(CalendarConfig::default()
            .with_sect(parse_sect(&self.sect)?)
            .with_epoch(self.from, self.to))
    }
}

fn parse_sect(s: &str) -> Result<ZiSect, String> {
    s.parse()
}

/// Print a value as pretty JSON.
fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}
