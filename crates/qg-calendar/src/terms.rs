//! The 24 solar terms (二十四节气).
//!
//! Terms alternate between 节 (sectional terms, which open a pillar month)
//! and 气 (principal terms, which fix lunar month numbering). They are spaced
//! 15° of solar longitude apart starting from 立春 at 315°.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use qg_core::Branch;

use crate::astro::{
    TROPICAL_YEAR, civil_from_jd_ceil, jd_from_civil, solve_sun_longitude, sun_longitude,
    sun_longitude_in_year,
};
use crate::error::{CalendarError, CalendarResult};

/// A solar term, in order from 立春.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    /// 立春, 315°
    LiChun,
    /// 雨水
    YuShui,
    /// 惊蛰
    JingZhe,
    /// 春分, 0°
    ChunFen,
    /// 清明
    QingMing,
    /// 谷雨
    GuYu,
    /// 立夏
    LiXia,
    /// 小满
    XiaoMan,
    /// 芒种
    MangZhong,
    /// 夏至, 90°
    XiaZhi,
    /// 小暑
    XiaoShu,
    /// 大暑
    DaShu,
    /// 立秋
    LiQiu,
    /// 处暑
    ChuShu,
    /// 白露
    BaiLu,
    /// 秋分, 180°
    QiuFen,
    /// 寒露
    HanLu,
    /// 霜降
    ShuangJiang,
    /// 立冬
    LiDong,
    /// 小雪
    XiaoXue,
    /// 大雪
    DaXue,
    /// 冬至, 270°
    DongZhi,
    /// 小寒
    XiaoHan,
    /// 大寒
    DaHan,
}

impl SolarTerm {
    /// All terms from 立春 to 大寒.
    pub const ALL: [SolarTerm; 24] = [
        Self::LiChun,
        Self::YuShui,
        Self::JingZhe,
        Self::ChunFen,
        Self::QingMing,
        Self::GuYu,
        Self::LiXia,
        Self::XiaoMan,
        Self::MangZhong,
        Self::XiaZhi,
        Self::XiaoShu,
        Self::DaShu,
        Self::LiQiu,
        Self::ChuShu,
        Self::BaiLu,
        Self::QiuFen,
        Self::HanLu,
        Self::ShuangJiang,
        Self::LiDong,
        Self::XiaoXue,
        Self::DaXue,
        Self::DongZhi,
        Self::XiaoHan,
        Self::DaHan,
    ];

    /// 0-based position from 立春.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Term at any position, wrapping.
    pub fn wrapping(index: i64) -> Self {
        Self::ALL[index.rem_euclid(24) as usize]
    }

    /// Solar longitude in degrees at which the term begins.
    pub fn longitude(self) -> f64 {
        (315.0 + 15.0 * self.index() as f64).rem_euclid(360.0)
    }

    /// Whether this is a 节, which opens a pillar month.
    pub fn is_jie(self) -> bool {
        self.index() % 2 == 0
    }

    /// The pillar month a 节 opens. Principal terms return `None`.
    pub fn month_branch(self) -> Option<Branch> {
        self.is_jie()
            .then(|| Branch::wrapping(2 + (self.index() / 2) as i64))
    }

    /// The 节 that opens a pillar month.
    pub fn jie_for(month: Branch) -> Self {
        let k = (month.index() as i64 - 2).rem_euclid(12);
        Self::wrapping(2 * k)
    }

    /// Whether the term falls in the Gregorian year after the 立春 that
    /// opens its sexagenary year (小寒 and 大寒, in January).
    pub fn crosses_new_year(self) -> bool {
        matches!(self, Self::XiaoHan | Self::DaHan)
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LiChun => "立春",
            Self::YuShui => "雨水",
            Self::JingZhe => "惊蛰",
            Self::ChunFen => "春分",
            Self::QingMing => "清明",
            Self::GuYu => "谷雨",
            Self::LiXia => "立夏",
            Self::XiaoMan => "小满",
            Self::MangZhong => "芒种",
            Self::XiaZhi => "夏至",
            Self::XiaoShu => "小暑",
            Self::DaShu => "大暑",
            Self::LiQiu => "立秋",
            Self::ChuShu => "处暑",
            Self::BaiLu => "白露",
            Self::QiuFen => "秋分",
            Self::HanLu => "寒露",
            Self::ShuangJiang => "霜降",
            Self::LiDong => "立冬",
            Self::XiaoXue => "小雪",
            Self::DaXue => "大雪",
            Self::DongZhi => "冬至",
            Self::XiaoHan => "小寒",
            Self::DaHan => "大寒",
        }
    }

    /// Look up a term by its Chinese name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name.trim())
    }

    /// The moment this term occurs within Gregorian year `year`, rounded up
    /// to the whole second.
    pub fn moment(self, year: i32) -> CalendarResult<NaiveDateTime> {
        civil_from_jd_ceil(sun_longitude_in_year(year, self.longitude()))
            .ok_or(CalendarError::YearOutOfRange(year))
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A solar term together with the moment it begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEvent {
    /// Which term.
    pub term: SolarTerm,
    /// When it begins, in UTC+8.
    pub at: NaiveDateTime,
}

/// Index of the 15° segment the Sun occupies at `at`, counted from 立春.
pub(crate) fn segment_at(at: NaiveDateTime) -> usize {
    let lon = sun_longitude(jd_from_civil(at));
    (((lon - 315.0).rem_euclid(360.0)) / 15.0).floor() as usize % 24
}

fn event_near(term: SolarTerm, at: NaiveDateTime, days_back: f64) -> CalendarResult<TermEvent> {
    let guess = jd_from_civil(at) - days_back;
    let jd = solve_sun_longitude(term.longitude(), guess);
    let moment = civil_from_jd_ceil(jd).ok_or(CalendarError::YearOutOfRange(at.year()))?;
    Ok(TermEvent { term, at: moment })
}

/// The most recent term at or before `at`, of any kind.
pub fn previous_term(at: NaiveDateTime) -> CalendarResult<TermEvent> {
    let term = SolarTerm::wrapping(segment_at(at) as i64);
    event_near(term, at, 7.5)
}

/// The first term strictly after `at`.
pub fn next_term(at: NaiveDateTime) -> CalendarResult<TermEvent> {
    let term = SolarTerm::wrapping(segment_at(at) as i64 + 1);
    event_near(term, at, -7.5)
}

/// The most recent 节 at or before `at`: the start of its pillar month.
pub fn previous_jie(at: NaiveDateTime) -> CalendarResult<TermEvent> {
    let seg = segment_at(at);
    let jie = seg - seg % 2;
    let back = (seg % 2) as f64 * 15.0 + 7.5;
    event_near(SolarTerm::wrapping(jie as i64), at, back * TROPICAL_YEAR / 360.0)
}

/// The first 节 strictly after `at`: the end of its pillar month.
pub fn next_jie(at: NaiveDateTime) -> CalendarResult<TermEvent> {
    let seg = segment_at(at);
    let jie = seg - seg % 2 + 2;
    let ahead = (2 - seg % 2) as f64 * 15.0 - 7.5;
    event_near(SolarTerm::wrapping(jie as i64), at, -ahead * TROPICAL_YEAR / 360.0)
}
