//! Pillars and the sexagenary cycle (六十甲子).
//!
//! A pillar is a stem paired with a branch of the same polarity. Only 60 of
//! the 120 stem × branch combinations satisfy that, and they form a single
//! cycle starting at 甲子 in which stem and branch both advance one step.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::derive::{derive_hour_stem, derive_month_stem};
use crate::error::{QgError, QgResult};
use crate::polarity::same_polarity;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: usize = 60;

/// One stem-branch pair. Always a member of the sexagenary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Pillar {
    stem: Stem,
    branch: Branch,
}

impl Pillar {
    /// Pair a stem with a branch, rejecting mixed polarity.
    pub fn new(stem: Stem, branch: Branch) -> QgResult<Self> {
        if same_polarity(stem, branch) {
            Ok(Self { stem, branch })
        } else {
            Err(QgError::PolarityMismatch { stem, branch })
        }
    }

    /// The pillar at a position in the cycle (甲子 = 0), wrapping.
    pub fn from_cycle_index(index: i64) -> Self {
        let i = index.rem_euclid(CYCLE_LEN as i64);
        Self {
            stem: Stem::wrapping(i),
            branch: Branch::wrapping(i),
        }
    }

    /// The stem.
    pub fn stem(self) -> Stem {
        self.stem
    }

    /// The branch.
    pub fn branch(self) -> Branch {
        self.branch
    }

    /// Position in the cycle, 甲子 = 0 through 癸亥 = 59.
    pub fn cycle_index(self) -> usize {
        let s = self.stem.index() as i64;
        let b = self.branch.index() as i64;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN as i64) as usize
    }

    /// The pillar `steps` positions later in the cycle.
    pub fn offset(self, steps: i64) -> Self {
        Self::from_cycle_index(self.cycle_index() as i64 + steps)
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl std::str::FromStr for Pillar {
    type Err = QgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(s), Some(b), None) => {
                let stem = Stem::from_glyph(s)
                    .ok_or_else(|| QgError::UnknownSymbol(s.to_string()))?;
                let branch = Branch::from_glyph(b)
                    .ok_or_else(|| QgError::UnknownSymbol(b.to_string()))?;
                Self::new(stem, branch)
            }
            _ => Err(QgError::UnknownSymbol(trimmed.to_string())),
        }
    }
}

impl From<Pillar> for String {
    fn from(p: Pillar) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Pillar {
    type Error = QgError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Iterator over the sexagenary cycle.
#[derive(Debug, Clone)]
pub struct SexagenaryCycle {
    next: usize,
}

impl SexagenaryCycle {
    /// Start at 甲子.
    pub fn new() -> Self {
        Self { next: 0 }
    }
}

impl Default for SexagenaryCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SexagenaryCycle {
    type Item = Pillar;

    fn next(&mut self) -> Option<Pillar> {
        if self.next >= CYCLE_LEN {
            return None;
        }
        let p = Pillar::from_cycle_index(self.next as i64);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = CYCLE_LEN - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for SexagenaryCycle {}

/// Which of the four pillars a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarKind {
    /// 年柱
    Year,
    /// 月柱
    Month,
    /// 日柱
    Day,
    /// 时柱
    Hour,
}

impl PillarKind {
    /// All kinds, year first.
    pub const ALL: [PillarKind; 4] = [Self::Year, Self::Month, Self::Day, Self::Hour];

    /// Single-character label used in display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "时",
        }
    }
}

impl std::fmt::Display for PillarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A complete set of year, month, day and hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourPillars {
    /// 年柱
    pub year: Pillar,
    /// 月柱
    pub month: Pillar,
    /// 日柱
    pub day: Pillar,
    /// 时柱
    pub hour: Pillar,
}

impl FourPillars {
    /// Assemble from the independent values, deriving the month and hour stems.
    pub fn from_independent(
        year: Pillar,
        month_branch: Branch,
        day: Pillar,
        hour_branch: Branch,
    ) -> Self {
        let month = Pillar {
            stem: derive_month_stem(year.stem, month_branch),
            branch: month_branch,
        };
        let hour = Pillar {
            stem: derive_hour_stem(day.stem, hour_branch),
            branch: hour_branch,
        };
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Whether the month and hour stems agree with the Five-Tiger and
    /// Five-Rat rules. Arbitrary pillars from a calendar always do; hand-built
    /// ones may not.
    pub fn is_consistent(&self) -> bool {
        derive_month_stem(self.year.stem, self.month.branch) == self.month.stem
            && derive_hour_stem(self.day.stem, self.hour.branch) == self.hour.stem
    }

    /// Pillar of the given kind.
    pub fn get(&self, kind: PillarKind) -> Pillar {
        match kind {
            PillarKind::Year => self.year,
            PillarKind::Month => self.month,
            PillarKind::Day => self.day,
            PillarKind::Hour => self.hour,
        }
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年 {}月 {}日 {}时",
            self.year, self.month, self.day, self.hour
        )
    }
}

impl std::str::FromStr for FourPillars {
    type Err = QgError;

    /// Parse four whitespace-separated pillars, e.g. `"甲辰 丙寅 甲子 甲子"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let [y, m, d, h] = parts.as_slice() else {
            return Err(QgError::UnknownSymbol(s.trim().to_string()));
        };
        Ok(Self {
            year: y.parse()?,
            month: m.parse()?,
            day: d.parse()?,
            hour: h.parse()?,
        })
    }
}
