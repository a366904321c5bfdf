use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CastProtocol;
use crate::draw::Draw;
use crate::error::{CastError, CastResult};
use crate::hexagram::LinePosition;
use crate::line::CastLine;

/// User-supplied three-digit codes, entered digit by digit.
///
/// Positions fill strictly initial to top: only the active position (the
/// first one holding fewer than three digits, or the top once all are full)
/// accepts digits or may be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericEntry {
    digits: [Vec<u8>; 6],
}

impl NumericEntry {
    /// An empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Position currently accepting input.
    pub fn active(&self) -> LinePosition {
        LinePosition::ALL
            .into_iter()
            .find(|p| self.digits[p.index()].len() < 3)
            .unwrap_or(LinePosition::Top)
    }

    /// Digits entered at a position so far.
    pub fn entry(&self, position: LinePosition) -> String {
        self.digits[position.index()]
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    /// Append one digit at `position`, which must be the active one.
    pub fn enter(&mut self, position: LinePosition, ch: char) -> CastResult<()> {
        let digit = ch
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or(CastError::NotADigit(ch))?;
        self.ensure_active(position)?;
        let slot = &mut self.digits[position.index()];
        if slot.len() >= 3 {
            return Err(CastError::PositionFull(position));
        }
        slot.push(digit);
        debug!(%position, entry = %self.entry(position), "digit entered");
        Ok(())
    }

    /// Append one digit at the active position.
    pub fn push_digit(&mut self, ch: char) -> CastResult<LinePosition> {
        let position = self.active();
        self.enter(position, ch)?;
        Ok(position)
    }

    /// Replace the active position's digits with a whole code.
    pub fn set_code(&mut self, position: LinePosition, code: &str) -> CastResult<()> {
        if let Some(bad) = code.chars().find(|c| !c.is_ascii_digit()) {
            return Err(CastError::NotADigit(bad));
        }
        let draw: Draw = code.parse()?;
        self.ensure_active(position)?;
        self.digits[position.index()] = draw.digits().to_vec();
        Ok(())
    }

    /// Fill the remaining positions from whole codes, bottom-up.
    pub fn extend_codes<'a>(&mut self, codes: impl IntoIterator<Item = &'a str>) -> CastResult<()> {
        for code in codes {
            let position = self.active();
            if self.digits[position.index()].len() == 3 {
                return Err(CastError::AlreadyComplete);
            }
            self.set_code(position, code)?;
        }
        Ok(())
    }

    /// Clear a position, which must be the active one.
    pub fn clear(&mut self, position: LinePosition) -> CastResult<()> {
        self.ensure_active(position)?;
        self.digits[position.index()].clear();
        Ok(())
    }

    fn ensure_active(&self, position: LinePosition) -> CastResult<()> {
        let active = self.active();
        if position == active {
            Ok(())
        } else {
            Err(CastError::NotActive { position, active })
        }
    }
}

impl CastProtocol for NumericEntry {
    const NAME: &'static str = "numeric";

    fn line(&self, position: LinePosition) -> Option<CastLine> {
        let digits: [u8; 3] = self.digits[position.index()].as_slice().try_into().ok()?;
        Draw::from_digits(digits).ok().map(CastLine::from)
    }

    fn reset(&mut self) {
        self.digits = Default::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagram::CastStatus;

    fn type_code(entry: &mut NumericEntry, code: &str) {
        for ch in code.chars() {
            entry.push_digit(ch).unwrap();
        }
    }

    #[test]
    fn strict_bottom_up_order() {
        let mut entry = NumericEntry::new();
        assert_eq!(
            entry.enter(LinePosition::Second, '1'),
            Err(CastError::NotActive {
                position: LinePosition::Second,
                active: LinePosition::Initial,
            })
        );
        entry.enter(LinePosition::Initial, '1').unwrap();
        entry.enter(LinePosition::Initial, '3').unwrap();
        // Two digits are not enough to move on.
        assert!(entry.enter(LinePosition::Second, '0').is_err());
        entry.enter(LinePosition::Initial, '5').unwrap();
        assert_eq!(entry.active(), LinePosition::Second);
        assert_eq!(entry.entry(LinePosition::Initial), "135");
        assert_eq!(entry.status(), CastStatus::Incomplete { filled: 1 });
    }

    #[test]
    fn rejects_non_digits() {
        let mut entry = NumericEntry::new();
        assert_eq!(entry.push_digit('x'), Err(CastError::NotADigit('x')));
        assert_eq!(entry.set_code(LinePosition::Initial, "1a0"), Err(CastError::NotADigit('a')));
        assert_eq!(entry.entry(LinePosition::Initial), "");
    }

    #[test]
    fn only_active_position_clears() {
        let mut entry = NumericEntry::new();
        type_code(&mut entry, "135");
        type_code(&mut entry, "2");
        assert!(matches!(
            entry.clear(LinePosition::Initial),
            Err(CastError::NotActive { .. })
        ));
        entry.clear(LinePosition::Second).unwrap();
        assert_eq!(entry.entry(LinePosition::Second), "");
        assert_eq!(entry.entry(LinePosition::Initial), "135");
    }

    #[test]
    fn complete_entry_keeps_top_active() {
        let mut entry = NumericEntry::new();
        entry
            .extend_codes(["135", "246", "100", "110", "100", "110"])
            .unwrap();
        assert_eq!(entry.status(), CastStatus::Complete);
        assert_eq!(entry.active(), LinePosition::Top);
        assert_eq!(
            entry.enter(LinePosition::Top, '1'),
            Err(CastError::PositionFull(LinePosition::Top))
        );
        assert_eq!(entry.extend_codes(["100"]), Err(CastError::AlreadyComplete));

        let hexagram = entry.hexagram().unwrap();
        assert_eq!(
            hexagram.moving_positions(),
            vec![LinePosition::Initial, LinePosition::Second]
        );

        entry.clear(LinePosition::Top).unwrap();
        assert_eq!(entry.status(), CastStatus::Incomplete { filled: 5 });
        assert!(entry.hexagram().is_err());
    }

    #[test]
    fn reset_empties_everything() {
        let mut entry = NumericEntry::new();
        entry.extend_codes(["135", "246"]).unwrap();
        entry.reset();
        assert_eq!(entry.active(), LinePosition::Initial);
        assert_eq!(entry.filled(), 0);
    }
}
