//! The six spirits (六神), assigned to lines from the day stem.

use serde::{Deserialize, Serialize};

use qg_core::Stem;

/// One of the six spirits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spirit {
    /// 青龙
    AzureDragon,
    /// 朱雀
    VermilionBird,
    /// 勾陈
    Gouchen,
    /// 螣蛇
    Tengshe,
    /// 白虎
    WhiteTiger,
    /// 玄武
    BlackTortoise,
}

impl Spirit {
    /// Spirits in assignment order.
    pub const ALL: [Spirit; 6] = [
        Self::AzureDragon,
        Self::VermilionBird,
        Self::Gouchen,
        Self::Tengshe,
        Self::WhiteTiger,
        Self::BlackTortoise,
    ];

    /// Chinese name.
    pub fn name(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龙",
            Self::VermilionBird => "朱雀",
            Self::Gouchen => "勾陈",
            Self::Tengshe => "螣蛇",
            Self::WhiteTiger => "白虎",
            Self::BlackTortoise => "玄武",
        }
    }

    /// Spirit on the initial line for a day stem.
    pub fn first_for(day_stem: Stem) -> Self {
        match day_stem {
            Stem::Jia | Stem::Yi => Self::AzureDragon,
            Stem::Bing | Stem::Ding => Self::VermilionBird,
            Stem::Wu => Self::Gouchen,
            Stem::Ji => Self::Tengshe,
            Stem::Geng | Stem::Xin => Self::WhiteTiger,
            Stem::Ren | Stem::Gui => Self::BlackTortoise,
        }
    }
}

impl std::fmt::Display for Spirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Spirits for the six lines, initial line first.
pub fn six_spirits(day_stem: Stem) -> [Spirit; 6] {
    let start = Spirit::first_for(day_stem) as usize;
    std::array::from_fn(|i| Spirit::ALL[(start + i) % 6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jia_day_starts_with_dragon() {
        let names: Vec<&str> = six_spirits(Stem::Jia).iter().map(|s| s.name()).collect();
        assert_eq!(names, ["青龙", "朱雀", "勾陈", "螣蛇", "白虎", "玄武"]);
    }

    #[test]
    fn gui_day_wraps() {
        let spirits = six_spirits(Stem::Gui);
        assert_eq!(spirits[0], Spirit::BlackTortoise);
        assert_eq!(spirits[1], Spirit::AzureDragon);
        assert_eq!(spirits[5], Spirit::WhiteTiger);
    }

    #[test]
    fn ji_day_starts_with_tengshe() {
        assert_eq!(six_spirits(Stem::Ji)[0], Spirit::Tengshe);
        assert_eq!(six_spirits(Stem::Wu)[0], Spirit::Gouchen);
    }
}
