//! The twelve earthly branches (地支).

use serde::{Deserialize, Serialize};

use crate::error::{QgError, QgResult};
use crate::polarity::Polarity;

/// An earthly branch. Declaration order is the cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Branch {
    /// 子
    Zi,
    /// 丑
    Chou,
    /// 寅
    Yin,
    /// 卯
    Mao,
    /// 辰
    Chen,
    /// 巳
    Si,
    /// 午
    Wu,
    /// 未
    Wei,
    /// 申
    Shen,
    /// 酉
    You,
    /// 戌
    Xu,
    /// 亥
    Hai,
}

impl Branch {
    /// All branches in cycle order.
    pub const ALL: [Branch; 12] = [
        Self::Zi,
        Self::Chou,
        Self::Yin,
        Self::Mao,
        Self::Chen,
        Self::Si,
        Self::Wu,
        Self::Wei,
        Self::Shen,
        Self::You,
        Self::Xu,
        Self::Hai,
    ];

    /// Number of branches in the cycle.
    pub const COUNT: usize = 12;

    /// 0-based position (子 = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Branch at a 0-based position.
    pub fn from_index(index: usize) -> QgResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(QgError::IndexOutOfRange {
                index,
                len: Self::COUNT,
            })
    }

    /// Branch at any integer position, wrapping around the cycle.
    pub fn wrapping(index: i64) -> Self {
        Self::ALL[index.rem_euclid(Self::COUNT as i64) as usize]
    }

    /// The branch `steps` positions later in the cycle (negative goes back).
    pub fn offset(self, steps: i64) -> Self {
        Self::wrapping(self.index() as i64 + steps)
    }

    /// Yin or Yang.
    pub fn polarity(self) -> Polarity {
        Polarity::of_index(self.index())
    }

    /// The Chinese character for this branch.
    pub fn glyph(self) -> char {
        match self {
            Self::Zi => '子',
            Self::Chou => '丑',
            Self::Yin => '寅',
            Self::Mao => '卯',
            Self::Chen => '辰',
            Self::Si => '巳',
            Self::Wu => '午',
            Self::Wei => '未',
            Self::Shen => '申',
            Self::You => '酉',
            Self::Xu => '戌',
            Self::Hai => '亥',
        }
    }

    /// Look up a branch by its character.
    pub fn from_glyph(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.glyph() == c)
    }

    /// Branches of the given polarity, in cycle order.
    pub fn with_polarity(polarity: Polarity) -> impl Iterator<Item = Branch> {
        Self::ALL
            .into_iter()
            .filter(move |b| b.polarity() == polarity)
    }

    /// Branch of the two-hour period containing a clock hour (0-23).
    ///
    /// 23:00 and 00:00 both fall in 子.
    pub fn from_hour(hour: u32) -> Self {
        Self::wrapping((hour as i64 + 1) / 2)
    }

    /// The zodiac animal associated with this branch.
    pub fn zodiac(self) -> Zodiac {
        Zodiac::ALL[self.index()]
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl std::str::FromStr for Branch {
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

/// Zodiac animal (生肖), one per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zodiac {
    /// 鼠
    Rat,
    /// 牛
    Ox,
    /// 虎
    Tiger,
    /// 兔
    Rabbit,
    /// 龙
    Dragon,
    /// 蛇
    Snake,
    /// 马
    Horse,
    /// 羊
    Goat,
    /// 猴
    Monkey,
    /// 鸡
    Rooster,
    /// 狗
    Dog,
    /// 猪
    Pig,
}

impl Zodiac {
    /// All animals in branch order.
    pub const ALL: [Zodiac; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// The Chinese character for this animal.
    pub fn glyph(self) -> char {
        match self {
            Self::Rat => '鼠',
            Self::Ox => '牛',
            Self::Tiger => '虎',
            Self::Rabbit => '兔',
            Self::Dragon => '龙',
            Self::Snake => '蛇',
            Self::Horse => '马',
            Self::Goat => '羊',
            Self::Monkey => '猴',
            Self::Rooster => '鸡',
            Self::Dog => '狗',
            Self::Pig => '猪',
        }
    }
}

impl std::fmt::Display for Zodiac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
