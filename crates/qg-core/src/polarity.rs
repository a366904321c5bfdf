use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Yin or Yang. Every stem and branch carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Even-indexed symbols (甲, 子, ...).
    Yang,
    /// Odd-indexed symbols (乙, 丑, ...).
    Yin,
}

impl Polarity {
    /// Polarity of a 0-based index into either symbol set.
    pub fn of_index(index: usize) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// The other polarity.
    pub fn opposite(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yang => write!(f, "阳"),
            Self::Yin => write!(f, "阴"),
        }
    }
}

/// Whether a stem and a branch may form a pillar.
pub fn same_polarity(stem: Stem, branch: Branch) -> bool {
    stem.polarity() == branch.polarity()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_parity() {
        assert_eq!(Polarity::of_index(0), Polarity::Yang);
        assert_eq!(Polarity::of_index(7), Polarity::Yin);
        assert_eq!(Polarity::Yang.opposite(), Polarity::Yin);
    }

    #[test]
    fn pairing() {
        assert!(same_polarity(Stem::Jia, Branch::Zi));
        assert!(same_polarity(Stem::Yi, Branch::Chou));
        assert!(!same_polarity(Stem::Jia, Branch::Chou));
        assert!(!same_polarity(Stem::Gui, Branch::Xu));
    }
}
