//! Incremental four-pillar entry.
//!
//! A [`PillarInput`] holds the six independently entered fields (year stem
//! and branch, month branch, day stem and branch, hour branch) plus the two
//! stems derived from them. It is a pure reducer: [`PillarInput::apply`]
//! takes an event and returns the next state together with an [`Outcome`].
//! Entries that would pair a stem and branch of different polarity are
//! rejected and leave the state untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::branch::Branch;
use crate::derive::{derive_hour_stem, derive_month_stem};
use crate::error::{QgError, QgResult};
use crate::pillar::{FourPillars, Pillar, PillarKind};
use crate::polarity::same_polarity;
use crate::stem::Stem;

/// One of the eight cells of a four-pillar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// 年干
    YearStem,
    /// 年支
    YearBranch,
    /// 月干 (derived)
    MonthStem,
    /// 月支
    MonthBranch,
    /// 日干
    DayStem,
    /// 日支
    DayBranch,
    /// 时干 (derived)
    HourStem,
    /// 时支
    HourBranch,
}

impl Field {
    /// The fields a user enters, in chart order.
    pub const INDEPENDENT: [Field; 6] = [
        Self::YearStem,
        Self::YearBranch,
        Self::MonthBranch,
        Self::DayStem,
        Self::DayBranch,
        Self::HourBranch,
    ];

    /// Whether this field is computed rather than entered.
    pub fn is_derived(self) -> bool {
        matches!(self, Self::MonthStem | Self::HourStem)
    }

    /// The pillar this field belongs to.
    pub fn kind(self) -> PillarKind {
        match self {
            Self::YearStem | Self::YearBranch => PillarKind::Year,
            Self::MonthStem | Self::MonthBranch => PillarKind::Month,
            Self::DayStem | Self::DayBranch => PillarKind::Day,
            Self::HourStem | Self::HourBranch => PillarKind::Hour,
        }
    }

    /// The stem field of a pillar.
    pub fn stem_of(kind: PillarKind) -> Self {
        match kind {
            PillarKind::Year => Self::YearStem,
            PillarKind::Month => Self::MonthStem,
            PillarKind::Day => Self::DayStem,
            PillarKind::Hour => Self::HourStem,
        }
    }

    /// The branch field of a pillar.
    pub fn branch_of(kind: PillarKind) -> Self {
        match kind {
            PillarKind::Year => Self::YearBranch,
            PillarKind::Month => Self::MonthBranch,
            PillarKind::Day => Self::DayBranch,
            PillarKind::Hour => Self::HourBranch,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let part = match self {
            Self::YearStem | Self::MonthStem | Self::DayStem | Self::HourStem => "干",
            _ => "支",
        };
        write!(f, "{}{}", self.kind(), part)
    }
}

/// The pillars whose stem and branch are both entered by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// 年柱
    Year,
    /// 日柱
    Day,
}

impl From<Slot> for PillarKind {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Year => PillarKind::Year,
            Slot::Day => PillarKind::Day,
        }
    }
}

/// A single user action on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Enter the stem of the year or day pillar.
    SetStem(Slot, Stem),
    /// Enter the branch of any pillar.
    SetBranch(PillarKind, Branch),
    /// Empty one field. Clearing a derived field is accepted and changes nothing.
    Clear(Field),
    /// Empty every field.
    ClearAll,
}

/// What happened when an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// False when the entry was refused; the state is then unchanged.
    pub accepted: bool,
    /// True when this event turned an incomplete chart into a complete one.
    pub completed: bool,
}

/// Whether every entered field has a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Completion {
    /// All six independent fields are set.
    Complete(FourPillars),
    /// Fields still missing, in chart order.
    Incomplete(Vec<Field>),
}

/// The partially filled four-pillar chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarInput {
    year_stem: Option<Stem>,
    year_branch: Option<Branch>,
    month_stem: Option<Stem>,
    month_branch: Option<Branch>,
    day_stem: Option<Stem>,
    day_branch: Option<Branch>,
    hour_stem: Option<Stem>,
    hour_branch: Option<Branch>,
}

impl PillarInput {
    /// An empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// A chart filled from complete pillars. The month and hour stems are
    /// re-derived, so inconsistent input stems are replaced.
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut input = Self {
            year_stem: Some(pillars.year.stem()),
            year_branch: Some(pillars.year.branch()),
            month_branch: Some(pillars.month.branch()),
            day_stem: Some(pillars.day.stem()),
            day_branch: Some(pillars.day.branch()),
            hour_branch: Some(pillars.hour.branch()),
            ..Self::default()
        };
        input.rederive();
        input
    }

    /// Stem currently held by a pillar.
    pub fn stem(&self, kind: PillarKind) -> Option<Stem> {
        match kind {
            PillarKind::Year => self.year_stem,
            PillarKind::Month => self.month_stem,
            PillarKind::Day => self.day_stem,
            PillarKind::Hour => self.hour_stem,
        }
    }

    /// Branch currently held by a pillar.
    pub fn branch(&self, kind: PillarKind) -> Option<Branch> {
        match kind {
            PillarKind::Year => self.year_branch,
            PillarKind::Month => self.month_branch,
            PillarKind::Day => self.day_branch,
            PillarKind::Hour => self.hour_branch,
        }
    }

    /// Whether a field currently holds a value.
    pub fn is_set(&self, field: Field) -> bool {
        let kind = field.kind();
        if field == Field::stem_of(kind) {
            self.stem(kind).is_some()
        } else {
            self.branch(kind).is_some()
        }
    }

    /// Apply one event, returning the next state and what happened.
    pub fn apply(&self, event: InputEvent) -> (Self, Outcome) {
        let was_complete = self.is_complete();
        let mut next = *self;

        let accepted = match event {
            InputEvent::SetStem(slot, stem) => next.set_stem(slot.into(), stem),
            InputEvent::SetBranch(kind, branch) => next.set_branch(kind, branch),
            InputEvent::Clear(field) => {
                next.clear(field);
                true
            }
            InputEvent::ClearAll => {
                next = Self::default();
                true
            }
        };

        if !accepted {
            debug!(?event, "pillar entry rejected");
            return (*self, Outcome {
                accepted: false,
                completed: false,
            });
        }

        next.rederive();
        let completed = !was_complete && next.is_complete();
        (next, Outcome {
            accepted: true,
            completed,
        })
    }

    /// Stems a pillar's stem field would accept right now.
    ///
    /// Derived stems accept nothing.
    pub fn legal_stems(&self, kind: PillarKind) -> Vec<Stem> {
        match kind {
            PillarKind::Month | PillarKind::Hour => Vec::new(),
            PillarKind::Year | PillarKind::Day => match self.branch(kind) {
                Some(b) => Stem::with_polarity(b.polarity()).collect(),
                None => Stem::ALL.to_vec(),
            },
        }
    }

    /// Branches a pillar's branch field would accept right now.
    pub fn legal_branches(&self, kind: PillarKind) -> Vec<Branch> {
        match kind {
            PillarKind::Month | PillarKind::Hour => Branch::ALL.to_vec(),
            PillarKind::Year | PillarKind::Day => match self.stem(kind) {
                Some(s) => Branch::with_polarity(s.polarity()).collect(),
                None => Branch::ALL.to_vec(),
            },
        }
    }

    /// Whether all six independent fields are set.
    pub fn is_complete(&self) -> bool {
        Field::INDEPENDENT.iter().all(|&f| self.is_set(f))
    }

    /// Completion status, with the pillars when complete.
    pub fn completion(&self) -> Completion {
        match (
            self.year_stem,
            self.year_branch,
            self.month_branch,
            self.day_stem,
            self.day_branch,
            self.hour_branch,
        ) {
            (Some(ys), Some(yb), Some(mb), Some(ds), Some(db), Some(hb)) => {
                match (Pillar::new(ys, yb), Pillar::new(ds, db)) {
                    (Ok(year), Ok(day)) => {
                        Completion::Complete(FourPillars::from_independent(year, mb, day, hb))
                    }
                    // The reducer never stores a mixed pair.
                    _ => Completion::Incomplete(Vec::new()),
                }
            }
            _ => Completion::Incomplete(
                Field::INDEPENDENT
                    .into_iter()
                    .filter(|&f| !self.is_set(f))
                    .collect(),
            ),
        }
    }

    /// The four pillars, or [`QgError::Incomplete`] listing missing fields.
    pub fn to_four_pillars(&self) -> QgResult<FourPillars> {
        match self.completion() {
            Completion::Complete(p) => Ok(p),
            Completion::Incomplete(missing) => Err(QgError::Incomplete(missing)),
        }
    }

    fn set_stem(&mut self, kind: PillarKind, stem: Stem) -> bool {
        let branch = self.branch(kind);
        if branch.is_some_and(|b| !same_polarity(stem, b)) {
            return false;
        }
        match kind {
            PillarKind::Year => self.year_stem = Some(stem),
            PillarKind::Day => self.day_stem = Some(stem),
            PillarKind::Month | PillarKind::Hour => return false,
        }
        true
    }

    fn set_branch(&mut self, kind: PillarKind, branch: Branch) -> bool {
        match kind {
            PillarKind::Year | PillarKind::Day => {
                if self.stem(kind).is_some_and(|s| !same_polarity(s, branch)) {
                    return false;
                }
                if kind == PillarKind::Year {
                    self.year_branch = Some(branch);
                } else {
                    self.day_branch = Some(branch);
                }
            }
            PillarKind::Month => self.month_branch = Some(branch),
            PillarKind::Hour => self.hour_branch = Some(branch),
        }
        true
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::YearStem => self.year_stem = None,
            Field::YearBranch => self.year_branch = None,
            Field::MonthBranch => self.month_branch = None,
            Field::DayStem => self.day_stem = None,
            Field::DayBranch => self.day_branch = None,
            Field::HourBranch => self.hour_branch = None,
            Field::MonthStem | Field::HourStem => {}
        }
    }

    fn rederive(&mut self) {
        self.month_stem = self
            .year_stem
            .zip(self.month_branch)
            .map(|(s, b)| derive_month_stem(s, b));
        self.hour_stem = self
            .day_stem
            .zip(self.hour_branch)
            .map(|(s, b)| derive_hour_stem(s, b));
    }
}
