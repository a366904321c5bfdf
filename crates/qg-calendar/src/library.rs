//! The calendar-library boundary and its built-in implementation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use qg_core::FourPillars;

use crate::config::SearchEpoch;
use crate::error::{CalendarError, CalendarResult};
use crate::instant::{HourBranch, LunarDateTime};
use crate::lunar::{LunarDate, MAX_YEAR, MIN_YEAR};
use crate::sexagenary::{self, ZiSect};

/// Gregorian/lunar arithmetic and pillar enumeration.
///
/// Resolution and sessions only talk to the calendar through this trait, so
/// a different calendar engine can be dropped in.
pub trait CalendarLibrary {
    /// Lunar form of a Gregorian instant.
    fn solar_to_lunar(&self, at: NaiveDateTime) -> CalendarResult<LunarDateTime>;

    /// Gregorian instant of a lunar date and time of day.
    fn lunar_to_solar(&self, date: LunarDate, time: NaiveTime) -> CalendarResult<NaiveDateTime>;

    /// Number of days in a Gregorian month.
    fn days_in_month(&self, year: i32, month: u32) -> CalendarResult<u32>;

    /// The first instant of each two-hour period in `epoch` whose pillars equal
    /// `pillars`, ascending: a whole hour, or the 节 when the month opens mid-hour.
    fn pillars_to_solar_dates(
        &self,
        pillars: &FourPillars,
        sect: ZiSect,
        epoch: SearchEpoch,
    ) -> CalendarResult<Vec<NaiveDateTime>>;

    /// Solar-term-exact pillars of an instant.
    fn exact_pillars(&self, at: NaiveDateTime, sect: ZiSect) -> CalendarResult<FourPillars>;
}

/// Proleptic Gregorian calendar with an astronomically computed lunar calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCalendar;

impl CalendarLibrary for StandardCalendar {
    fn solar_to_lunar(&self, at: NaiveDateTime) -> CalendarResult<LunarDateTime> {
        Ok(LunarDateTime {
            date: LunarDate::from_solar(at.date())?,
            hour: HourBranch::of_hour(at.hour()),
            time: at.time(),
        })
    }

    fn lunar_to_solar(&self, date: LunarDate, time: NaiveTime) -> CalendarResult<NaiveDateTime> {
        Ok(date.to_solar()?.and_time(time))
    }

    fn days_in_month(&self, year: i32, month: u32) -> CalendarResult<u32> {
        let invalid = || CalendarError::InvalidGregorian(format!("{year}-{month:02}"));
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;
        Ok((next - first).num_days() as u32)
    }

    fn pillars_to_solar_dates(
        &self,
        pillars: &FourPillars,
        sect: ZiSect,
        epoch: SearchEpoch,
    ) -> CalendarResult<Vec<NaiveDateTime>> {
        sexagenary::search(pillars, sect, epoch)
    }

    fn exact_pillars(&self, at: NaiveDateTime, sect: ZiSect) -> CalendarResult<FourPillars> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&at.year()) {
            return Err(CalendarError::YearOutOfRange(at.year()));
        }
        Ok(sexagenary::exact_pillars(at, sect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        let cal = StandardCalendar;
        assert_eq!(cal.days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(cal.days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(cal.days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(cal.days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(cal.days_in_month(2024, 12).unwrap(), 31);
        assert_eq!(cal.days_in_month(2024, 4).unwrap(), 30);
        assert!(cal.days_in_month(2024, 13).is_err());
        assert!(cal.days_in_month(2024, 0).is_err());
    }

    #[test]
    fn solar_lunar_round_trip() {
        let cal = StandardCalendar;
        let at = NaiveDate::from_ymd_opt(2020, 6, 1)
            .unwrap()
            .and_hms_opt(23, 15, 0)
            .unwrap();
        let lunar = cal.solar_to_lunar(at).unwrap();
        assert!(lunar.date.leap);
        assert_eq!(lunar.date.month, 4);
        assert_eq!(lunar.hour.to_string(), "晚子时");
        assert_eq!(cal.lunar_to_solar(lunar.date, lunar.time).unwrap(), at);
    }

    #[test]
    fn exact_pillars_rejects_far_years() {
        let at = NaiveDate::from_ymd_opt(3500, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            StandardCalendar.exact_pillars(at, ZiSect::NextDay),
            Err(CalendarError::YearOutOfRange(3500))
        ));
    }
}
