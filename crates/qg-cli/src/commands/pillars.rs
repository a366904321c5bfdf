use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use qg_calendar::{CalendarInstant, Resolution, StandardCalendar, SystemClock, resolve};
use qg_core::FourPillars;

use super::CalendarArgs;

#[derive(Serialize)]
struct Report<'a> {
    resolution: &'a Resolution,
    instants: Vec<CalendarInstant>,
}

pub fn run(
    pillars: &str,
    calendar: &CalendarArgs,
    minute: Option<u32>,
    second: Option<u32>,
    json: bool,
) -> Result<(), String> {
    let pillars: FourPillars = pillars.parse().map_err(|e| format!("{e}"))?;
    let mut config = calendar.config()?;
    if minute.is_some() || second.is_some() {
        config = config.with_fixed_time(minute.unwrap_or(0), second.unwrap_or(0));
    }

    let library = StandardCalendar;
    let resolution =
        resolve(&library, &SystemClock, &config, &pillars).map_err(|e| e.to_string())?;

    let mut instants = Vec::with_capacity(resolution.len());
    for candidate in resolution.most_recent_first() {
        let instant = CalendarInstant::describe(&library, candidate.solar, config.sect)
            .map_err(|e| e.to_string())?;
        instants.push(instant);
    }

    if json {
        return super::print_json(&Report {
            resolution: &resolution,
            instants,
        });
    }

    println!(
        "  {} {}",
        pillars.to_string().bold(),
        format!(
            "({}-{}, {})",
            config.epoch.start(),
            config.epoch.end(),
            config.sect
        )
        .dimmed()
    );
    if !pillars.is_consistent() {
        println!(
            "  {}",
            "The month stem does not follow from the year stem; no instant can match.".yellow()
        );
    }
    if resolution.is_empty() {
        println!("  No Gregorian instant carries these pillars.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Rank", "Gregorian (UTC+8)", "Lunar", "Hour"]);
    for (candidate, instant) in resolution.most_recent_first().zip(&instants) {
        let (lunar, hour) = match &instant.lunar {
            Some(l) => (l.date.to_string(), l.hour.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        table.add_row(vec![
            format!("{}/{}", candidate.rank, candidate.total),
            candidate.solar.format("%Y-%m-%d %H:%M:%S").to_string(),
            lunar,
            hour,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} candidates", resolution.len());

    Ok(())
}
