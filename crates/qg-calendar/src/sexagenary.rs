//! Solar-term-exact pillars and the reverse pillar search.
//!
//! The year turns at the 立春 instant, the month at each 节 instant, and the
//! day at midnight, except that under [`ZiSect::NextDay`] the late 子 hour
//! (23:00-23:59) already counts as the following day.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use qg_core::{Branch, FourPillars, Pillar};

use crate::astro::julian_day_number;
use crate::config::SearchEpoch;
use crate::error::{CalendarError, CalendarResult};
use crate::lunar::{MAX_YEAR, MIN_YEAR};
use crate::terms::{SolarTerm, segment_at};

/// Which day the late 子 hour (23:00-23:59) belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiSect {
    /// 23:00 already uses the next day's pillar.
    #[default]
    NextDay,
    /// 23:00 keeps the current day's pillar; its hour stem is derived from it.
    SameDay,
}

impl std::fmt::Display for ZiSect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NextDay => write!(f, "next-day"),
            Self::SameDay => write!(f, "same-day"),
        }
    }
}

impl std::str::FromStr for ZiSect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "next-day" | "next" | "1" => Ok(Self::NextDay),
            "same-day" | "same" | "2" => Ok(Self::SameDay),
            other => Err(format!("unknown zi sect '{other}' (expected next-day or same-day)")),
        }
    }
}

/// Pillar of a sexagenary year, where year Y starts at 立春 of Gregorian Y.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle_index(i64::from(year) - 4)
}

/// Day pillar of a civil date. 1949-10-01 is 甲子.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle_index(julian_day_number(date) + 49)
}

/// The four pillars of a civil instant (UTC+8).
pub fn exact_pillars(at: NaiveDateTime, sect: ZiSect) -> FourPillars {
    let month_offset = segment_at(at) / 2;
    let month_branch = Branch::wrapping(2 + month_offset as i64);

    // January and early February still belong to the previous year's 子/丑 months.
    let mut year = at.year();
    if at.month() <= 2 && month_offset >= 10 {
        year -= 1;
    }

    let mut day_date = at.date();
    if at.hour() == 23 && sect == ZiSect::NextDay {
        day_date += TimeDelta::days(1);
    }

    FourPillars::from_independent(
        year_pillar(year),
        month_branch,
        day_pillar(day_date),
        Branch::from_hour(at.hour()),
    )
}

/// The first instant of every matching two-hour period within `epoch`, in
/// ascending order.
///
/// Each instant is a whole hour, or the 节 moment itself when the month
/// opens partway through the requested hour. For each sexagenary year with
/// the requested year pillar, the day pillar can recur only once inside the
/// requested month, so the candidate day is found by counting forward from
/// the 节 that opens it. Pillars whose month or hour stem disagree with the
/// derivation rules match nothing.
pub fn search(
    pillars: &FourPillars,
    sect: ZiSect,
    epoch: SearchEpoch,
) -> CalendarResult<Vec<NaiveDateTime>> {
    if epoch.start() < MIN_YEAR {
        return Err(CalendarError::YearOutOfRange(epoch.start()));
    }
    if epoch.end() >= MAX_YEAR {
        return Err(CalendarError::YearOutOfRange(epoch.end()));
    }
    if !pillars.is_consistent() {
        debug!(%pillars, "pillars violate stem derivation, no instants");
        return Ok(Vec::new());
    }

    let jie = SolarTerm::jie_for(pillars.month.branch());
    let hour_branch = pillars.hour.branch();
    let mut hours = vec![hour_branch.index() as u32 * 2];
    if hour_branch == Branch::Zi && sect == ZiSect::SameDay {
        hours.push(23);
    }

    let wanted_year = pillars.year.cycle_index() as i64;
    let first_offset =
        (wanted_year - year_pillar(epoch.start()).cycle_index() as i64).rem_euclid(60);
    let mut year = epoch.start() + first_offset as i32;

    let mut found = Vec::new();
    while year <= epoch.end() {
        let term_year = if jie.crosses_new_year() { year + 1 } else { year };
        let jie_at = jie.moment(term_year)?;
        let jie_date = jie_at.date();
        let days = (pillars.day.cycle_index() as i64 - day_pillar(jie_date).cycle_index() as i64)
            .rem_euclid(60);
        let date = jie_date + TimeDelta::days(days);

        for &hour in &hours {
            let Some(at) = date.and_hms_opt(hour, 0, 0) else {
                continue;
            };
            if exact_pillars(at, sect) == *pillars {
                found.push(at);
            }
        }
        if exact_pillars(jie_at, sect) == *pillars {
            found.push(jie_at);
        }
        year += 60;
    }

    found.sort();
    found.dedup();
    debug!(%pillars, count = found.len(), "pillar search finished");
    Ok(found)
}
