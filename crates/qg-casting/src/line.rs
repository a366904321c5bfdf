//! Line kinds and cast lines.

use serde::{Deserialize, Serialize};

use qg_core::Polarity;

use crate::draw::Draw;

/// The four kinds of line, by how many coins showed their back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// 老阴: no odd digits. Yin, moving.
    OldYin,
    /// 少阳: one odd digit. Yang, stable.
    YoungYang,
    /// 少阴: two odd digits. Yin, stable.
    YoungYin,
    /// 老阳: three odd digits. Yang, moving.
    OldYang,
}

impl LineKind {
    /// Kind for an odd-digit count. Counts above 3 saturate to 老阳.
    pub fn from_odd_count(count: u8) -> Self {
        match count {
            0 => Self::OldYin,
            1 => Self::YoungYang,
            2 => Self::YoungYin,
            _ => Self::OldYang,
        }
    }

    /// Odd-digit count that produces this kind.
    pub fn odd_count(self) -> u8 {
        match self {
            Self::OldYin => 0,
            Self::YoungYang => 1,
            Self::YoungYin => 2,
            Self::OldYang => 3,
        }
    }

    /// Whether the line changes into its opposite.
    pub fn is_moving(self) -> bool {
        matches!(self, Self::OldYin | Self::OldYang)
    }

    /// Polarity of the line as cast.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::YoungYang | Self::OldYang => Polarity::Yang,
            Self::YoungYin | Self::OldYin => Polarity::Yin,
        }
    }

    /// Polarity after moving lines have changed.
    pub fn changed_polarity(self) -> Polarity {
        if self.is_moving() {
            self.polarity().opposite()
        } else {
            self.polarity()
        }
    }

    /// Drawn form of the line.
    pub fn symbol(self) -> &'static str {
        match self.polarity() {
            Polarity::Yang => "▅▅▅▅▅",
            Polarity::Yin => "▅▅ ▅▅",
        }
    }

    /// Moving-line marker: ○ for 老阳, × for 老阴.
    pub fn marker(self) -> Option<char> {
        match self {
            Self::OldYang => Some('○'),
            Self::OldYin => Some('×'),
            _ => None,
        }
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::OldYin => "老阴",
            Self::YoungYang => "少阳",
            Self::YoungYin => "少阴",
            Self::OldYang => "老阳",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One filled line: the draw it came from and what it means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastLine {
    /// The three-digit draw.
    pub value: Draw,
    /// Number of odd digits in the draw.
    pub odd_count: u8,
    /// Line kind derived from the odd count.
    pub kind: LineKind,
}

impl From<Draw> for CastLine {
    fn from(value: Draw) -> Self {
        let odd_count = value.odd_count();
        Self {
            value,
            odd_count,
            kind: LineKind::from_odd_count(odd_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(code: &str) -> CastLine {
        CastLine::from(code.parse::<Draw>().unwrap())
    }

    #[test]
    fn scenario_draws() {
        assert_eq!(line("135").kind, LineKind::OldYang);
        assert_eq!(line("246").kind, LineKind::OldYin);
        assert_eq!(line("100").kind, LineKind::YoungYang);
        assert_eq!(line("110").kind, LineKind::YoungYin);
    }

    #[test]
    fn moving_lines_flip() {
        assert!(LineKind::OldYang.is_moving());
        assert_eq!(LineKind::OldYang.changed_polarity(), Polarity::Yin);
        assert_eq!(LineKind::OldYin.changed_polarity(), Polarity::Yang);
        assert_eq!(LineKind::YoungYin.changed_polarity(), Polarity::Yin);
        assert_eq!(LineKind::YoungYang.marker(), None);
        assert_eq!(LineKind::OldYin.marker(), Some('×'));
    }

    #[test]
    fn kind_depends_only_on_parity() {
        for value in 0..1000u16 {
            let draw = Draw::from_value(value).unwrap();
            let kind = CastLine::from(draw).kind;
            assert_eq!(kind.odd_count(), draw.odd_count());
        }
    }
}
