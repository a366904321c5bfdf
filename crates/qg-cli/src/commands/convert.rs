use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use colored::Colorize;
use serde::Serialize;

use qg_calendar::terms::{next_jie, next_term, previous_jie, previous_term};
use qg_calendar::{CalendarInstant, LunarDate, Moment, StandardCalendar, TermEvent, ZiSect};

#[derive(Serialize)]
struct Description {
    instant: CalendarInstant,
    previous_jie: TermEvent,
    next_jie: TermEvent,
    previous_term: TermEvent,
    next_term: TermEvent,
}

pub fn solar(date: &str, time: &str, sect: &str, json: bool) -> Result<(), String> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{date}' (expected YYYY-MM-DD)"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| format!("invalid time '{time}' (expected HH:MM or HH:MM:SS)"))?;
    let moment = Moment::Gregorian {
        year: date.year(),
        month: date.month(),
        day: date.day(),
        hour: time.hour(),
        minute: time.minute(),
        second: time.second(),
    };
    describe(moment, super::parse_sect(sect)?, json)
}

pub fn lunar(
    year: i32,
    month: u8,
    day: u8,
    leap: bool,
    hour: u32,
    sect: &str,
    json: bool,
) -> Result<(), String> {
    let moment = Moment::Lunar {
        date: LunarDate::new(year, month, leap, day),
        hour,
        minute: 0,
        second: 0,
    };
    describe(moment, super::parse_sect(sect)?, json)
}

fn describe(moment: Moment, sect: ZiSect, json: bool) -> Result<(), String> {
    let library = StandardCalendar;
    let at = moment.to_solar(&library).map_err(|e| e.to_string())?;
    let instant = CalendarInstant::describe(&library, at, sect).map_err(|e| e.to_string())?;
    let description = Description {
        instant,
        previous_jie: previous_jie(at).map_err(|e| e.to_string())?,
        next_jie: next_jie(at).map_err(|e| e.to_string())?,
        previous_term: previous_term(at).map_err(|e| e.to_string())?,
        next_term: next_term(at).map_err(|e| e.to_string())?,
    };

    if json {
        return super::print_json(&description);
    }

    println!("  {}  {}", "Gregorian".bold(), fmt_time(at));
    if let Some(lunar) = &instant.lunar {
        println!(
            "  {}      {} {} ({}年)",
            "Lunar".bold(),
            lunar.date,
            lunar.hour,
            lunar.zodiac()
        );
    }
    if let Some(pillars) = &instant.pillars {
        println!("  {}    {}", "Pillars".bold(), pillars.to_string().green());
    }
    println!();
    println!(
        "  节  {} {}  →  {} {}",
        description.previous_jie.term,
        fmt_time(description.previous_jie.at).dimmed(),
        description.next_jie.term,
        fmt_time(description.next_jie.at).dimmed()
    );
    println!(
        "  气  {} {}  →  {} {}",
        description.previous_term.term,
        fmt_time(description.previous_term.at).dimmed(),
        description.next_term.term,
        fmt_time(description.next_term.at).dimmed()
    );

    Ok(())
}

pub(super) fn fmt_time(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}
