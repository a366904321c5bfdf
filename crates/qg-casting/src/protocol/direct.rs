use serde::{Deserialize, Serialize};
use tracing::debug;

use qg_core::Polarity;

use super::CastProtocol;
use crate::draw::Draw;
use crate::hexagram::LinePosition;
use crate::line::CastLine;

/// A directly chosen line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectChoice {
    /// Stable yang, recorded as 100.
    Yang,
    /// Moving yang, recorded as 111.
    YangMoving,
    /// Stable yin, recorded as 110.
    Yin,
    /// Moving yin, recorded as 000.
    YinMoving,
}

impl DirectChoice {
    /// Stable choice of a polarity.
    pub fn stable(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Yang => Self::Yang,
            Polarity::Yin => Self::Yin,
        }
    }

    /// Moving choice of a polarity.
    pub fn moving(polarity: Polarity) -> Self {
        match polarity {
            Polarity::Yang => Self::YangMoving,
            Polarity::Yin => Self::YinMoving,
        }
    }

    /// Polarity as chosen.
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Yang | Self::YangMoving => Polarity::Yang,
            Self::Yin | Self::YinMoving => Polarity::Yin,
        }
    }

    /// Whether the choice is a moving line.
    pub fn is_moving(self) -> bool {
        matches!(self, Self::YangMoving | Self::YinMoving)
    }

    /// The fixed draw recorded for this choice.
    pub fn draw(self) -> Draw {
        let digits = match self {
            Self::Yang => [1, 0, 0],
            Self::YangMoving => [1, 1, 1],
            Self::Yin => [1, 1, 0],
            Self::YinMoving => [0, 0, 0],
        };
        Draw::from_digits(digits).unwrap_or_default()
    }

    /// Next state after picking `polarity` on a position currently holding
    /// `current`.
    pub fn toggled(current: Option<Self>, polarity: Polarity) -> Self {
        match current {
            Some(c) if c.polarity() == polarity && !c.is_moving() => Self::moving(polarity),
            _ => Self::stable(polarity),
        }
    }
}

/// Lines chosen by polarity, in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectEntry {
    choices: [Option<DirectChoice>; 6],
}

impl DirectEntry {
    /// Nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choice at a position.
    pub fn choice(&self, position: LinePosition) -> Option<DirectChoice> {
        self.choices[position.index()]
    }

    /// Pick a polarity at a position. Picking the same stable polarity again
    /// makes the line moving; picking a moving line again makes it stable.
    pub fn toggle(&mut self, position: LinePosition, polarity: Polarity) -> DirectChoice {
        let next = DirectChoice::toggled(self.choice(position), polarity);
        self.choices[position.index()] = Some(next);
        debug!(%position, ?next, "direct choice");
        next
    }

    /// Set a position outright.
    pub fn set(&mut self, position: LinePosition, choice: DirectChoice) {
        self.choices[position.index()] = Some(choice);
    }

    /// Forget the choice at a position.
    pub fn unset(&mut self, position: LinePosition) {
        self.choices[position.index()] = None;
    }
}

impl CastProtocol for DirectEntry {
    const NAME: &'static str = "direct";

    fn line(&self, position: LinePosition) -> Option<CastLine> {
        self.choice(position).map(|c| CastLine::from(c.draw()))
    }

    fn reset(&mut self) {
        self.choices = [None; 6];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CastError;
    use crate::hexagram::CastStatus;
    use crate::line::LineKind;

    #[test]
    fn fixed_draws() {
        let kinds = [
            (DirectChoice::Yang, "100", LineKind::YoungYang),
            (DirectChoice::YangMoving, "111", LineKind::OldYang),
            (DirectChoice::Yin, "110", LineKind::YoungYin),
            (DirectChoice::YinMoving, "000", LineKind::OldYin),
        ];
        for (choice, code, kind) in kinds {
            assert_eq!(choice.draw().to_string(), code);
            assert_eq!(CastLine::from(choice.draw()).kind, kind);
        }
    }

    #[test]
    fn toggle_cycle() {
        let mut entry = DirectEntry::new();
        let pos = LinePosition::Third;
        assert_eq!(entry.toggle(pos, Polarity::Yang), DirectChoice::Yang);
        assert_eq!(entry.toggle(pos, Polarity::Yang), DirectChoice::YangMoving);
        assert_eq!(entry.toggle(pos, Polarity::Yang), DirectChoice::Yang);
        assert_eq!(entry.toggle(pos, Polarity::Yang), DirectChoice::YangMoving);
        assert_eq!(entry.toggle(pos, Polarity::Yin), DirectChoice::Yin);
    }

    #[test]
    fn partial_selection_is_incomplete() {
        let mut entry = DirectEntry::new();
        entry.toggle(LinePosition::Top, Polarity::Yin);
        entry.toggle(LinePosition::Initial, Polarity::Yang);
        assert_eq!(entry.status(), CastStatus::Incomplete { filled: 2 });
        assert_eq!(entry.hexagram(), Err(CastError::Incomplete { filled: 2 }));
    }

    #[test]
    fn any_order_completes() {
        let mut entry = DirectEntry::new();
        for pos in LinePosition::ALL.into_iter().rev() {
            entry.toggle(pos, Polarity::Yang);
        }
        entry.toggle(LinePosition::Fifth, Polarity::Yang);
        let hexagram = entry.hexagram().unwrap();
        assert_eq!(hexagram.primary().king_wen(), 1);
        assert_eq!(hexagram.moving_positions(), vec![LinePosition::Fifth]);
        // 乾 with a moving fifth line becomes 大有.
        assert_eq!(hexagram.changed().unwrap().king_wen(), 14);

        entry.unset(LinePosition::Second);
        assert_eq!(entry.filled(), 5);
    }
}
