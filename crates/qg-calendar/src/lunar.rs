//! The Chinese lunisolar calendar.
//!
//! Months begin on the civil day of a new moon. The month containing the
//! winter solstice is always the eleventh. When thirteen months separate
//! two consecutive eleventh months, the first of them containing no
//! principal term (中气) is intercalary and repeats the previous number.

use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use qg_core::{Pillar, Zodiac};

use crate::astro::{
    civil_date_of, jd_from_civil, new_moon, new_moon_index_before, sun_longitude_in_year,
};
use crate::error::{CalendarError, CalendarResult};

/// Earliest Gregorian year the built-in calendar computes.
pub const MIN_YEAR: i32 = 1000;
/// Latest Gregorian year the built-in calendar computes.
pub const MAX_YEAR: i32 = 3000;

const MONTH_NAMES: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一", "十二",
    "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二", "廿三", "廿四",
    "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

/// Name of a lunar month without the trailing 月, e.g. `"正"` or `"闰二"`.
pub fn month_name(number: u8, leap: bool) -> String {
    let base = MONTH_NAMES
        .get(usize::from(number).wrapping_sub(1))
        .copied()
        .unwrap_or("?");
    if leap {
        format!("闰{base}")
    } else {
        base.to_string()
    }
}

/// Name of a lunar day, e.g. `"初一"`, `"廿三"`.
pub fn day_name(day: u8) -> &'static str {
    DAY_NAMES
        .get(usize::from(day).wrapping_sub(1))
        .copied()
        .unwrap_or("?")
}

/// One lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarMonth {
    /// Month number 1-12.
    pub number: u8,
    /// Whether this is the intercalary repeat of `number`.
    pub leap: bool,
    /// Civil date of the first day.
    pub start: NaiveDate,
    /// Length in days (29 or 30).
    pub days: u8,
}

impl LunarMonth {
    /// Whether the month contains a civil date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end()
    }

    /// First civil date after the month.
    pub fn end(&self) -> NaiveDate {
        self.start + TimeDelta::days(i64::from(self.days))
    }
}

/// The months from one 正月 up to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarYear {
    /// Gregorian year in which this lunar year's 正月 begins.
    pub year: i32,
    /// Months in order, 12 or 13 of them.
    pub months: Vec<LunarMonth>,
}

impl LunarYear {
    /// Compute the lunar year whose 正月 starts in Gregorian `year`.
    pub fn compute(year: i32) -> CalendarResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }
        let before = sui(year - 1)?;
        let after = sui(year)?;
        let is_first = |m: &LunarMonth| m.number == 1 && !m.leap;

        let first = before
            .iter()
            .position(is_first)
            .ok_or_else(|| CalendarError::Library(format!("no first month in {year}")))?;
        let mut months: Vec<LunarMonth> = before[first..].to_vec();
        months.extend(after.iter().take_while(|m| !is_first(m)).copied());

        Ok(Self { year, months })
    }

    /// Sexagenary name of the year, counted from the lunar new year.
    pub fn pillar(&self) -> Pillar {
        Pillar::from_cycle_index(i64::from(self.year) - 4)
    }

    /// Zodiac animal of the year.
    pub fn zodiac(&self) -> Zodiac {
        self.pillar().branch().zodiac()
    }

    /// Number of the intercalary month, if the year has one.
    pub fn leap_month(&self) -> Option<u8> {
        self.months.iter().find(|m| m.leap).map(|m| m.number)
    }

    /// A month by number and leap flag.
    pub fn month(&self, number: u8, leap: bool) -> Option<&LunarMonth> {
        self.months
            .iter()
            .find(|m| m.number == number && m.leap == leap)
    }

    /// The month containing a civil date.
    pub fn month_containing(&self, date: NaiveDate) -> Option<&LunarMonth> {
        self.months.iter().find(|m| m.contains(date))
    }

    /// Civil date of 正月初一.
    pub fn start(&self) -> Option<NaiveDate> {
        self.months.first().map(|m| m.start)
    }
}

/// A date in the lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year, numbered by the Gregorian year of its 正月.
    pub year: i32,
    /// Month number 1-12.
    pub month: u8,
    /// Whether the month is intercalary.
    pub leap: bool,
    /// Day of the month, 1-30.
    pub day: u8,
}

impl LunarDate {
    /// A lunar date. Existence is checked on conversion, not here.
    pub fn new(year: i32, month: u8, leap: bool, day: u8) -> Self {
        Self {
            year,
            month,
            leap,
            day,
        }
    }

    /// Sexagenary name of the lunar year.
    pub fn year_pillar(&self) -> Pillar {
        Pillar::from_cycle_index(i64::from(self.year) - 4)
    }

    /// Month name without 月, e.g. `"闰四"`.
    pub fn month_name(&self) -> String {
        month_name(self.month, self.leap)
    }

    /// Day name, e.g. `"十五"`.
    pub fn day_name(&self) -> &'static str {
        day_name(self.day)
    }

    /// Convert from a civil date.
    pub fn from_solar(date: NaiveDate) -> CalendarResult<Self> {
        let mut year = LunarYear::compute(date.year())?;
        if year.start().is_some_and(|s| date < s) {
            year = LunarYear::compute(date.year() - 1)?;
        }
        let month = year
            .month_containing(date)
            .ok_or_else(|| CalendarError::Library(format!("{date} not covered by lunar year")))?;
        let day = (date - month.start).num_days() + 1;
        Ok(Self {
            year: year.year,
            month: month.number,
            leap: month.leap,
            day: day as u8,
        })
    }

    /// Convert to a civil date, rejecting dates that do not exist.
    pub fn to_solar(&self) -> CalendarResult<NaiveDate> {
        if !(1..=12).contains(&self.month) || !(1..=30).contains(&self.day) {
            return Err(CalendarError::InvalidLunar(format!(
                "month {} day {}",
                self.month, self.day
            )));
        }
        let year = LunarYear::compute(self.year)?;
        let month = year.month(self.month, self.leap).ok_or_else(|| {
            CalendarError::InvalidLunar(format!("{} has no {}月", self.year, self.month_name()))
        })?;
        if self.day > month.days {
            return Err(CalendarError::InvalidLunar(format!(
                "{}年{}月 has only {} days",
                self.year,
                self.month_name(),
                month.days
            )));
        }
        Ok(month.start + TimeDelta::days(i64::from(self.day) - 1))
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}月{}",
            self.year_pillar(),
            self.month_name(),
            self.day_name()
        )
    }
}

fn date_of(jd: f64) -> CalendarResult<NaiveDate> {
    civil_date_of(jd).ok_or_else(|| CalendarError::Library(format!("julian day {jd} out of range")))
}

/// Index of the new moon that starts the lunar month containing `date`.
fn lunation_containing(date: NaiveDate) -> i64 {
    let next_midnight = (date + TimeDelta::days(1)).and_time(NaiveTime::MIN);
    new_moon_index_before(jd_from_civil(next_midnight) - 1e-7)
}

/// Months from the one containing the winter solstice of `ws_year` up to,
/// but excluding, the one containing the next winter solstice.
fn sui(ws_year: i32) -> CalendarResult<Vec<LunarMonth>> {
    let solstice = date_of(sun_longitude_in_year(ws_year, 270.0))?;
    let next_solstice = date_of(sun_longitude_in_year(ws_year + 1, 270.0))?;

    let first = lunation_containing(solstice);
    let last = lunation_containing(next_solstice);
    let starts = (first..=last)
        .map(|k| date_of(new_moon(k)))
        .collect::<CalendarResult<Vec<_>>>()?;

    // Principal terms from this solstice through the next, 30° apart.
    let mut zhongqi = vec![solstice];
    for i in 1..=12 {
        let lon = (270.0 + 30.0 * f64::from(i)).rem_euclid(360.0);
        zhongqi.push(date_of(sun_longitude_in_year(ws_year + 1, lon))?);
    }

    let has_leap = starts.len() == 14;
    let mut leap_taken = false;
    let mut number: u8 = 10;
    let mut months = Vec::with_capacity(13);
    for pair in starts.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let has_zhongqi = zhongqi.iter().any(|&z| z >= start && z < end);
        let leap = has_leap && !leap_taken && !has_zhongqi;
        if leap {
            leap_taken = true;
        } else {
            number = number % 12 + 1;
        }
        months.push(LunarMonth {
            number,
            leap,
            start,
            days: (end - start).num_days() as u8,
        });
    }
    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn names() {
        assert_eq!(month_name(1, false), "正");
        assert_eq!(month_name(11, false), "冬");
        assert_eq!(month_name(12, true), "闰腊");
        assert_eq!(day_name(1), "初一");
        assert_eq!(day_name(20), "二十");
        assert_eq!(day_name(21), "廿一");
        assert_eq!(day_name(30), "三十");
    }

    #[test]
    fn spring_festival_2024() {
        let d = LunarDate::from_solar(date(2024, 2, 10)).unwrap();
        assert_eq!(d, LunarDate::new(2024, 1, false, 1));
        assert_eq!(d.to_string(), "甲辰年正月初一");

        let lantern = LunarDate::from_solar(date(2024, 2, 24)).unwrap();
        assert_eq!(lantern.day_name(), "十五");
    }

    #[test]
    fn eve_belongs_to_previous_year() {
        let d = LunarDate::from_solar(date(2024, 2, 9)).unwrap();
        assert_eq!(d.year, 2023);
        assert_eq!(d.month, 12);
        assert_eq!(d.day_name(), "三十");
    }

    #[test]
    fn leap_months() {
        let y2023 = LunarYear::compute(2023).unwrap();
        assert_eq!(y2023.months.len(), 13);
        assert_eq!(y2023.leap_month(), Some(2));
        assert_eq!(
            LunarDate::from_solar(date(2023, 3, 22)).unwrap(),
            LunarDate::new(2023, 2, true, 1)
        );

        let y2020 = LunarYear::compute(2020).unwrap();
        assert_eq!(y2020.leap_month(), Some(4));
        assert_eq!(y2020.month(4, true).unwrap().start, date(2020, 5, 23));

        assert_eq!(LunarYear::compute(2024).unwrap().leap_month(), None);
        assert_eq!(LunarYear::compute(2033).unwrap().leap_month(), Some(11));
    }

    #[test]
    fn lunar_to_solar() {
        assert_eq!(
            LunarDate::new(2024, 1, false, 1).to_solar().unwrap(),
            date(2024, 2, 10)
        );
        assert_eq!(
            LunarDate::new(2023, 2, true, 1).to_solar().unwrap(),
            date(2023, 3, 22)
        );
    }

    #[test]
    fn nonexistent_lunar_dates() {
        assert!(matches!(
            LunarDate::new(2024, 2, true, 1).to_solar(),
            Err(CalendarError::InvalidLunar(_))
        ));
        assert!(matches!(
            LunarDate::new(2024, 13, false, 1).to_solar(),
            Err(CalendarError::InvalidLunar(_))
        ));
        let year = LunarYear::compute(2024).unwrap();
        let short = year.months.iter().find(|m| m.days == 29).unwrap();
        assert!(matches!(
            LunarDate::new(2024, short.number, short.leap, 30).to_solar(),
            Err(CalendarError::InvalidLunar(_))
        ));
    }

    #[test]
    fn months_are_contiguous() {
        let year = LunarYear::compute(2025).unwrap();
        for pair in year.months.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start);
            assert!(pair[0].days == 29 || pair[0].days == 30);
        }
    }

    #[test]
    fn out_of_range_year() {
        assert!(matches!(
            LunarYear::compute(5000),
            Err(CalendarError::YearOutOfRange(5000))
        ));
    }
}
