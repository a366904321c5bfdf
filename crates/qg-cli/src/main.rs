//! CLI frontend for Qigua: four-pillar resolution and hexagram casting.

mod commands;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "qg",
    about = "Qigua: sexagenary calendar resolution and Liu Yao hexagram casting",
    version,
    propagate_version = true
)]
struct Cli {
    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve four pillars to the Gregorian instants that carry them
    Pillars {
        /// Four pillars, e.g. "己丑 癸酉 甲子 壬申"
        pillars: String,

        #[command(flatten)]
        calendar: commands::CalendarArgs,

        /// Fixed minute for candidates (default: current wall-clock minute)
        #[arg(long)]
        minute: Option<u32>,

        /// Fixed second for candidates (default: current wall-clock second)
        #[arg(long)]
        second: Option<u32>,
    },

    /// Describe a Gregorian date and time (UTC+8)
    Solar {
        /// Date as YYYY-MM-DD
        date: String,

        /// Time as HH:MM or HH:MM:SS
        #[arg(default_value = "00:00")]
        time: String,

        /// Late 子 convention: next-day or same-day
        #[arg(long, default_value = "next-day")]
        sect: String,
    },

    /// Describe a lunar date
    Lunar {
        /// Lunar year
        year: i32,

        /// Lunar month, 1-12
        month: u8,

        /// Lunar day, 1-30
        day: u8,

        /// The intercalary (闰) repeat of the month
        #[arg(long)]
        leap: bool,

        /// Clock hour, 0-23
        #[arg(long, default_value = "0")]
        hour: u32,

        /// Late 子 convention: next-day or same-day
        #[arg(long, default_value = "next-day")]
        sect: String,
    },

    /// List the 24 solar terms of a Gregorian year
    Terms {
        /// Gregorian year
        year: i32,
    },

    /// List the months of a lunar year
    Year {
        /// Lunar year
        year: i32,
    },

    /// Cast a hexagram
    Cast {
        /// Protocol: sequential, one-shot, numeric or direct
        #[arg(short, long, default_value = "one-shot")]
        protocol: String,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Six three-digit codes, initial line first (numeric protocol)
        #[arg(long, value_delimiter = ',')]
        codes: Vec<String>,

        /// Six lines as 7 (yang), 9 (moving yang), 8 (yin) or 6 (moving yin), initial first (direct protocol)
        #[arg(long)]
        lines: Option<String>,

        /// Day stem for the six spirits, e.g. 甲
        #[arg(long)]
        day_stem: Option<String>,
    },

    /// List the sixty-pillar cycle
    Cycle,

    /// Start an interactive divination session
    Session {
        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        #[command(flatten)]
        calendar: commands::CalendarArgs,
    },
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    let result = match cli.command {
        Commands::Pillars {
            pillars,
            calendar,
            minute,
            second,
        } => commands::pillars::run(&pillars, &calendar, minute, second, json),
        Commands::Solar { date, time, sect } => commands::convert::solar(&date, &time, &sect, json),
        Commands::Lunar {
            year,
            month,
            day,
            leap,
            hour,
            sect,
        } => commands::convert::lunar(year, month, day, leap, hour, &sect, json),
        Commands::Terms { year } => commands::terms::run(year, json),
        Commands::Year { year } => commands::year::run(year, json),
        Commands::Cast {
            protocol,
            seed,
            codes,
            lines,
            day_stem,
        } => commands::cast::run(&commands::cast::CastArgs {
            protocol: &protocol,
            seed,
            codes: &codes,
            lines: lines.as_deref(),
            day_stem: day_stem.as_deref(),
            json,
        }),
        Commands::Cycle => commands::cycle::run(json),
        Commands::Session { seed, calendar } => commands::session::run(seed, &calendar),
    };

    result.map_err(|e| {
        tracing::debug!(error = %e, "command failed");
        miette::miette!("{e}")
    })
}
