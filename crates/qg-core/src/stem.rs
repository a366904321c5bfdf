//! The ten heavenly stems (天干).

use serde::{Deserialize, Serialize};

use crate::error::{QgError, QgResult};
use crate::polarity::Polarity;

/// A heavenly stem. Declaration order is the cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    /// 甲
    Jia,
    /// 乙
    Yi,
    /// 丙
    Bing,
    /// 丁
    Ding,
    /// 戊
    Wu,
    /// 己
    Ji,
    /// 庚
    Geng,
    /// 辛
    Xin,
    /// 壬
    Ren,
    /// 癸
    Gui,
}

impl Stem {
    /// All stems in cycle order.
    pub const ALL: [Stem; 10] = [
        Self::Jia,
        Self::Yi,
        Self::Bing,
        Self::Ding,
        Self::Wu,
        Self::Ji,
        Self::Geng,
        Self::Xin,
        Self::Ren,
        Self::Gui,
    ];

    /// Number of stems in the cycle.
    pub const COUNT: usize = 10;

    /// 0-based position (甲 = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Stem at a 0-based position.
    pub fn from_index(index: usize) -> QgResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(QgError::IndexOutOfRange {
                index,
                len: Self::COUNT,
            })
    }

    /// Stem at any integer position, wrapping around the cycle.
    pub fn wrapping(index: i64) -> Self {
        Self::ALL[index.rem_euclid(Self::COUNT as i64) as usize]
    }

    /// The stem `steps` positions later in the cycle (negative goes back).
    pub fn offset(self, steps: i64) -> Self {
        Self::wrapping(self.index() as i64 + steps)
    }

    /// Yin or Yang.
    pub fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// The Chinese character for this stem.
    pub fn glyph(self) -> char {
        match self {
            Self::Jia => '甲',
            Self::Yi => '乙',
            Self::Bing => '丙',
            Self::Ding => '丁',
            Self::Wu => '戊',
            Self::Ji => '己',
            Self::Geng => '庚',
            Self::Xin => '辛',
            Self::Ren => '壬',
            Self::Gui => '癸',
        }
    }

    /// Look up a stem by its character.
    pub fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.glyph() == c)
    }

    /// Stems of the given polarity, in cycle order.
    pub fn with_polarity(polarity: Polarity) -> impl Iterator<Item = Stem> {
        Self::ALL
            .into_iter()
            .filter(move |s| s.polarity() == polarity)
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl std::str::FromStr for Stem {
    type Err = QgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_glyph(c).ok_or_else(|| QgError::UnknownSymbol(trimmed.to_string()))
            }
            _ => Err(QgError::UnknownSymbol(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_round_trip() {
        for stem in Stem::ALL {
            assert_eq!(Stem::from_glyph(stem.glyph()), Some(stem));
            assert_eq!(stem.to_string().parse::<Stem>(), Ok(stem));
        }
        assert_eq!(Stem::from_glyph('子'), None);
        assert!("甲乙".parse::<Stem>().is_err());
    }

    #[test]
    fn polarity_alternates() {
        let yang: Vec<char> = Stem::with_polarity(Polarity::Yang)
            .map(Stem::glyph)
            .collect();
        assert_eq!(yang, vec!['甲', '丙', '戊', '庚', '壬']);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Stem::Gui.offset(1), Stem::Jia);
        assert_eq!(Stem::Jia.offset(-1), Stem::Gui);
        assert_eq!(Stem::Bing.offset(22), Stem::Wu);
    }

    #[test]
    fn index_bounds() {
        assert_eq!(Stem::from_index(9), Ok(Stem::Gui));
        assert_eq!(
            Stem::from_index(10),
            Err(QgError::IndexOutOfRange { index: 10, len: 10 })
        );
    }
}
