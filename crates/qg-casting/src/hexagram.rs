//! Six-line hexagrams.
//!
//! Lines are always indexed bottom-up: the initial line is position 1 and
//! the top line position 6.

use serde::{Deserialize, Serialize};

use qg_core::{Polarity, Stem};

use crate::error::{CastError, CastResult};
use crate::line::CastLine;
use crate::spirits::{Spirit, six_spirits};
use crate::trigram::{Pattern, Trigram};

/// Position of a line, bottom-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LinePosition {
    /// 初爻
    Initial,
    /// 二爻
    Second,
    /// 三爻
    Third,
    /// 四爻
    Fourth,
    /// 五爻
    Fifth,
    /// 上爻
    Top,
}

impl LinePosition {
    /// All positions, initial first.
    pub const ALL: [LinePosition; 6] = [
        Self::Initial,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Top,
    ];

    /// 0-based index, initial = 0.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Position from a 0-based index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position from a 1-based ordinal as users count lines.
    pub fn from_ordinal(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(Self::from_index)
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Initial => "初爻",
            Self::Second => "二爻",
            Self::Third => "三爻",
            Self::Fourth => "四爻",
            Self::Fifth => "五爻",
            Self::Top => "上爻",
        }
    }
}

impl std::fmt::Display for LinePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Progress of a casting protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastStatus {
    /// Fewer than six lines filled.
    Incomplete {
        /// Lines filled so far.
        filled: usize,
    },
    /// All six lines filled.
    Complete,
}

impl CastStatus {
    /// Status for a filled-line count.
    pub fn from_filled(filled: usize) -> Self {
        if filled >= 6 {
            Self::Complete
        } else {
            Self::Incomplete { filled }
        }
    }

    /// Whether all six lines are filled.
    pub fn is_complete(self) -> bool {
        self == Self::Complete
    }
}

impl std::fmt::Display for CastStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete { filled } => write!(f, "{filled}/6"),
            Self::Complete => write!(f, "6/6"),
        }
    }
}

/// Lines filled so far, bottom-up, never more than six.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStack {
    lines: Vec<CastLine>,
}

impl LineStack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the next line up.
    pub fn push(&mut self, line: CastLine) -> CastResult<LinePosition> {
        let position =
            LinePosition::from_index(self.lines.len()).ok_or(CastError::AlreadyComplete)?;
        self.lines.push(line);
        Ok(position)
    }

    /// Lines filled so far.
    pub fn lines(&self) -> &[CastLine] {
        &self.lines
    }

    /// Number of lines filled.
    pub fn filled(&self) -> usize {
        self.lines.len()
    }

    /// Current progress.
    pub fn status(&self) -> CastStatus {
        CastStatus::from_filled(self.lines.len())
    }

    /// Empty the stack.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The finished hexagram, or [`CastError::Incomplete`].
    pub fn hexagram(&self) -> CastResult<Hexagram> {
        Hexagram::from_lines(&self.lines)
    }
}

/// A complete six-line hexagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hexagram {
    lines: [CastLine; 6],
}

impl Hexagram {
    /// Build from exactly six lines, initial first.
    pub fn from_lines(lines: &[CastLine]) -> CastResult<Self> {
        let lines: [CastLine; 6] = lines.try_into().map_err(|_| CastError::Incomplete {
            filled: lines.len().min(6),
        })?;
        Ok(Self { lines })
    }

    /// The six lines, initial first.
    pub fn lines(&self) -> &[CastLine; 6] {
        &self.lines
    }

    /// One line.
    pub fn line(&self, position: LinePosition) -> &CastLine {
        &self.lines[position.index()]
    }

    /// Positions of moving lines, bottom-up.
    pub fn moving_positions(&self) -> Vec<LinePosition> {
        LinePosition::ALL
            .into_iter()
            .filter(|p| self.line(*p).kind.is_moving())
            .collect()
    }

    /// The hexagram as cast (本卦).
    pub fn primary(&self) -> Pattern {
        Pattern(self.lines.map(|l| l.kind.polarity() == Polarity::Yang))
    }

    /// The hexagram after moving lines change (变卦), if any line moves.
    pub fn changed(&self) -> Option<Pattern> {
        if self.lines.iter().any(|l| l.kind.is_moving()) {
            Some(Pattern(
                self.lines
                    .map(|l| l.kind.changed_polarity() == Polarity::Yang),
            ))
        } else {
            None
        }
    }

    /// Identify the primary and changed hexagrams, with spirits when a day
    /// stem is known.
    pub fn reading(&self, day_stem: Option<Stem>) -> Reading {
        Reading {
            primary: HexagramInfo::from(self.primary()),
            changed: self.changed().map(HexagramInfo::from),
            moving: self.moving_positions(),
            spirits: day_stem.map(six_spirits),
        }
    }
}

/// Identity of one hexagram figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexagramInfo {
    /// King Wen number.
    pub number: u8,
    /// Short name, e.g. 泰.
    pub name: String,
    /// Name with images, e.g. 地天泰.
    pub full_name: String,
    /// Upper trigram.
    pub upper: Trigram,
    /// Lower trigram.
    pub lower: Trigram,
    /// Lines bottom-up.
    pub pattern: Pattern,
}

impl From<Pattern> for HexagramInfo {
    fn from(pattern: Pattern) -> Self {
        Self {
            number: pattern.king_wen(),
            name: pattern.name().to_string(),
            full_name: pattern.full_name(),
            upper: pattern.upper(),
            lower: pattern.lower(),
            pattern,
        }
    }
}

/// Everything derived from a complete hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// 本卦
    pub primary: HexagramInfo,
    /// 变卦, absent when no line moves.
    pub changed: Option<HexagramInfo>,
    /// Moving line positions, bottom-up.
    pub moving: Vec<LinePosition>,
    /// Six spirits bottom-up, when the day stem is known.
    pub spirits: Option<[Spirit; 6]>,
}
