//! The eight trigrams and King Wen numbering of the 64 hexagrams.

use serde::{Deserialize, Serialize};

/// A three-line figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigram {
    /// 乾, heaven
    Qian,
    /// 震, thunder
    Zhen,
    /// 坎, water
    Kan,
    /// 艮, mountain
    Gen,
    /// 坤, earth
    Kun,
    /// 巽, wind
    Xun,
    /// 离, fire
    Li,
    /// 兑, lake
    Dui,
}

impl Trigram {
    /// All trigrams, in the order used by [`KING_WEN`].
    pub const ALL: [Trigram; 8] = [
        Self::Qian,
        Self::Zhen,
        Self::Kan,
        Self::Gen,
        Self::Kun,
        Self::Xun,
        Self::Li,
        Self::Dui,
    ];

    /// Lines bottom-up, `true` for yang.
    pub fn lines(self) -> [bool; 3] {
        match self {
            Self::Qian => [true, true, true],
            Self::Zhen => [true, false, false],
            Self::Kan => [false, true, false],
            Self::Gen => [false, false, true],
            Self::Kun => [false, false, false],
            Self::Xun => [false, true, true],
            Self::Li => [true, false, true],
            Self::Dui => [true, true, false],
        }
    }

    /// The trigram with these lines, bottom-up.
    pub fn from_lines(lines: [bool; 3]) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.lines() == lines)
            .unwrap_or(Self::Kun)
    }

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Qian => "乾",
            Self::Zhen => "震",
            Self::Kan => "坎",
            Self::Gen => "艮",
            Self::Kun => "坤",
            Self::Xun => "巽",
            Self::Li => "离",
            Self::Dui => "兑",
        }
    }

    /// The natural image, e.g. 天 for 乾.
    pub fn image(self) -> &'static str {
        match self {
            Self::Qian => "天",
            Self::Zhen => "雷",
            Self::Kan => "水",
            Self::Gen => "山",
            Self::Kun => "地",
            Self::Xun => "风",
            Self::Li => "火",
            Self::Dui => "泽",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// King Wen number by lower trigram (row) and upper trigram (column).
pub const KING_WEN: [[u8; 8]; 8] = [
    [1, 34, 5, 26, 11, 9, 14, 43],
    [25, 51, 3, 27, 24, 42, 21, 17],
    [6, 40, 29, 4, 7, 59, 64, 47],
    [33, 62, 39, 52, 15, 53, 56, 31],
    [12, 16, 8, 23, 2, 20, 35, 45],
    [44, 32, 48, 18, 46, 57, 50, 28],
    [13, 55, 63, 22, 36, 37, 30, 49],
    [10, 54, 60, 41, 19, 61, 38, 58],
];

const NAMES: [&str; 64] = [
    "乾", "坤", "屯", "蒙", "需", "讼", "师", "比", "小畜", "履", "泰", "否", "同人", "大有",
    "谦", "豫", "随", "蛊", "临", "观", "噬嗑", "贲", "剥", "复", "无妄", "大畜", "颐", "大过",
    "坎", "离", "咸", "恒", "遯", "大壮", "晋", "明夷", "家人", "睽", "蹇", "解", "损", "益",
    "夬", "姤", "萃", "升", "困", "井", "革", "鼎", "震", "艮", "渐", "归妹", "丰", "旅", "巽",
    "兑", "涣", "节", "中孚", "小过", "既济", "未济",
];

/// Six lines bottom-up, `true` for yang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern(pub [bool; 6]);

impl Pattern {
    /// Lower (inner) trigram.
    pub fn lower(self) -> Trigram {
        Trigram::from_lines([self.0[0], self.0[1], self.0[2]])
    }

    /// Upper (outer) trigram.
    pub fn upper(self) -> Trigram {
        Trigram::from_lines([self.0[3], self.0[4], self.0[5]])
    }

    /// King Wen sequence number, 1-64.
    pub fn king_wen(self) -> u8 {
        KING_WEN[self.lower().position()][self.upper().position()]
    }

    /// Traditional short name, e.g. 泰.
    pub fn name(self) -> &'static str {
        NAMES[usize::from(self.king_wen()) - 1]
    }

    /// Full name with images, e.g. 地天泰; doubled trigrams read 乾为天.
    pub fn full_name(self) -> String {
        let (upper, lower) = (self.upper(), self.lower());
        if upper == lower {
            format!("{}为{}", upper.name(), upper.image())
        } else {
            format!("{}{}{}", upper.image(), lower.image(), self.name())
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.full_name(), self.king_wen())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn pattern(lower: Trigram, upper: Trigram) -> Pattern {
        let (l, u) = (lower.lines(), upper.lines());
        Pattern([l[0], l[1], l[2], u[0], u[1], u[2]])
    }

    #[test]
    fn trigram_lines_round_trip() {
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_lines(t.lines()), t);
        }
    }

    #[test]
    fn table_is_a_permutation() {
        let all: HashSet<u8> = KING_WEN.iter().flatten().copied().collect();
        assert_eq!(all.len(), 64);
        assert!(all.iter().all(|&n| (1..=64).contains(&n)));
    }

    #[test]
    fn well_known_hexagrams() {
        let tai = pattern(Trigram::Qian, Trigram::Kun);
        assert_eq!(tai.king_wen(), 11);
        assert_eq!(tai.name(), "泰");
        assert_eq!(tai.full_name(), "地天泰");

        let pi = pattern(Trigram::Kun, Trigram::Qian);
        assert_eq!(pi.name(), "否");

        let ji_ji = pattern(Trigram::Li, Trigram::Kan);
        assert_eq!(ji_ji.king_wen(), 63);
        assert_eq!(ji_ji.name(), "既济");

        let qian = Pattern([true; 6]);
        assert_eq!(qian.full_name(), "乾为天");
        assert_eq!(Pattern([false; 6]).king_wen(), 2);
    }
}
