//! Calendar instants and the three ways of describing one.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use qg_core::{Branch, FourPillars, Pillar, Zodiac};

use crate::error::{CalendarError, CalendarResult};
use crate::library::CalendarLibrary;
use crate::lunar::LunarDate;
use crate::sexagenary::ZiSect;

/// Which half of the 子 hour an instant falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZiHalf {
    /// 00:00-00:59, 早子时.
    Early,
    /// 23:00-23:59, 晚子时.
    Late,
}

/// The two-hour period of an instant, with the 子 hour split at midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HourBranch {
    /// Branch of the period.
    pub branch: Branch,
    /// Set only for 子.
    pub zi: Option<ZiHalf>,
}

impl HourBranch {
    /// Period containing a clock hour (0-23).
    pub fn of_hour(hour: u32) -> Self {
        let zi = match hour {
            0 => Some(ZiHalf::Early),
            23 => Some(ZiHalf::Late),
            _ => None,
        };
        Self {
            branch: Branch::from_hour(hour),
            zi,
        }
    }
}

impl std::fmt::Display for HourBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.zi {
            Some(ZiHalf::Early) => write!(f, "早子时"),
            Some(ZiHalf::Late) => write!(f, "晚子时"),
            None => write!(f, "{}时", self.branch),
        }
    }
}

/// A lunar date with its time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarDateTime {
    /// The lunar date.
    pub date: LunarDate,
    /// Two-hour period.
    pub hour: HourBranch,
    /// Clock time of day.
    pub time: NaiveTime,
}

impl LunarDateTime {
    /// Sexagenary name of the lunar year.
    pub fn year_pillar(&self) -> Pillar {
        self.date.year_pillar()
    }

    /// Zodiac animal of the lunar year.
    pub fn zodiac(&self) -> Zodiac {
        self.year_pillar().branch().zodiac()
    }
}

impl std::fmt::Display for LunarDateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.hour)
    }
}

/// One moment with every representation the calendar could derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarInstant {
    /// Gregorian date and time, UTC+8.
    pub solar: NaiveDateTime,
    /// Lunar representation, if derived.
    pub lunar: Option<LunarDateTime>,
    /// Solar-term-exact pillars, if derived.
    pub pillars: Option<FourPillars>,
}

impl CalendarInstant {
    /// An instant with only its Gregorian form.
    pub fn solar(at: NaiveDateTime) -> Self {
        Self {
            solar: at,
            lunar: None,
            pillars: None,
        }
    }

    /// Derive the lunar and pillar representations through a calendar library.
    pub fn describe<L: CalendarLibrary + ?Sized>(
        library: &L,
        at: NaiveDateTime,
        sect: ZiSect,
    ) -> CalendarResult<Self> {
        Ok(Self {
            solar: at,
            lunar: Some(library.solar_to_lunar(at)?),
            pillars: Some(library.exact_pillars(at, sect)?),
        })
    }
}

/// A moment as the user typed it, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Moment {
    /// A Gregorian date and time.
    Gregorian {
        /// Year.
        year: i32,
        /// Month, 1-12.
        month: u32,
        /// Day of month.
        day: u32,
        /// Hour, 0-23.
        hour: u32,
        /// Minute, 0-59.
        minute: u32,
        /// Second, 0-59.
        second: u32,
    },
    /// A lunar date and time.
    Lunar {
        /// The lunar date.
        date: LunarDate,
        /// Hour, 0-23.
        hour: u32,
        /// Minute, 0-59.
        minute: u32,
        /// Second, 0-59.
        second: u32,
    },
}

impl Moment {
    /// Validate and convert to a Gregorian instant.
    pub fn to_solar<L: CalendarLibrary + ?Sized>(
        &self,
        library: &L,
    ) -> CalendarResult<NaiveDateTime> {
        match *self {
            Self::Gregorian {
                year,
                month,
                day,
                hour,
                minute,
                second,
            } => {
                let days = library.days_in_month(year, month)?;
                if day == 0 || day > days {
                    return Err(CalendarError::InvalidGregorian(format!(
                        "{year}-{month:02} has {days} days, got {day}"
                    )));
                }
                let time = time_of_day(hour, minute, second)?;
                let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
                    CalendarError::InvalidGregorian(format!("{year}-{month:02}-{day:02}"))
                })?;
                Ok(date.and_time(time))
            }
            Self::Lunar {
                date,
                hour,
                minute,
                second,
            } => {
                let time = time_of_day(hour, minute, second)?;
                library.lunar_to_solar(date, time)
            }
        }
    }
}

fn time_of_day(hour: u32, minute: u32, second: u32) -> CalendarResult<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        CalendarError::InvalidGregorian(format!("{hour:02}:{minute:02}:{second:02}"))
    })
}

/// Replace the minute and second of an instant.
pub(crate) fn with_minute_second(
    at: NaiveDateTime,
    minute: u32,
    second: u32,
) -> Option<NaiveDateTime> {
    at.with_minute(minute)?.with_second(second)
}
