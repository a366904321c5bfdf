use serde::{Deserialize, Serialize};
use tracing::info;

use super::CastProtocol;
use crate::error::{CastError, CastResult};
use crate::hexagram::{Hexagram, LinePosition, LineStack};
use crate::line::CastLine;
use crate::random::RandomnessService;

/// Six draws resolved in a single transition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneShotCast {
    lines: LineStack,
}

impl OneShotCast {
    /// An empty cast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw all six lines. Either every position is filled or, on a failed
    /// draw, none is.
    pub fn cast_all<R: RandomnessService + ?Sized>(&mut self, rng: &mut R) -> CastResult<Hexagram> {
        if self.lines.filled() > 0 {
            return Err(CastError::AlreadyComplete);
        }
        let mut lines = Vec::with_capacity(6);
        for _ in LinePosition::ALL {
            lines.push(CastLine::from(rng.draw_three_digit()?));
        }
        let hexagram = Hexagram::from_lines(&lines)?;
        for line in lines {
            self.lines.push(line)?;
        }
        info!(primary = %hexagram.primary(), "one-shot cast complete");
        Ok(hexagram)
    }
}

impl CastProtocol for OneShotCast {
    const NAME: &'static str = "one-shot";

    fn line(&self, position: LinePosition) -> Option<CastLine> {
        self.lines.lines().get(position.index()).copied()
    }

    fn reset(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::Draw;
    use crate::hexagram::CastStatus;
    use crate::random::{RngService, ScriptedDraws};

    #[test]
    fn fills_everything_at_once() {
        let mut cast = OneShotCast::new();
        let hexagram = cast.cast_all(&mut RngService::seeded(11)).unwrap();
        assert_eq!(cast.status(), CastStatus::Complete);
        assert_eq!(cast.hexagram(), Ok(hexagram));
    }

    #[test]
    fn failed_draw_leaves_it_empty() {
        let draws = ["100", "110", "135"].map(|c| c.parse::<Draw>().unwrap());
        let mut cast = OneShotCast::new();
        let result = cast.cast_all(&mut ScriptedDraws::new(draws));
        assert!(matches!(result, Err(CastError::Randomness(_))));
        assert_eq!(cast.status(), CastStatus::Incomplete { filled: 0 });
    }

    #[test]
    fn second_cast_needs_reset() {
        let mut rng = RngService::seeded(2);
        let mut cast = OneShotCast::new();
        cast.cast_all(&mut rng).unwrap();
        assert_eq!(cast.cast_all(&mut rng), Err(CastError::AlreadyComplete));
        cast.reset();
        assert!(cast.cast_all(&mut rng).is_ok());
    }
}
