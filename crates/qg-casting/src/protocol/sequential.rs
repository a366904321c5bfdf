use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::CastProtocol;
use crate::error::{CastError, CastResult};
use crate::hexagram::{LinePosition, LineStack};
use crate::line::CastLine;
use crate::random::RandomnessService;

/// One random draw per request, strictly initial to top.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialCast {
    lines: LineStack,
}

impl SequentialCast {
    /// An empty cast.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the next line. Fails with [`CastError::AlreadyComplete`] once all
    /// six are filled; a failed draw leaves the state untouched.
    pub fn cast_next<R: RandomnessService + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> CastResult<(LinePosition, CastLine)> {
        if self.lines.status().is_complete() {
            return Err(CastError::AlreadyComplete);
        }
        let line = CastLine::from(rng.draw_three_digit()?);
        let position = self.lines.push(line)?;
        debug!(%position, draw = %line.value, kind = %line.kind, "line cast");
        if self.lines.status().is_complete() {
            info!("sequential cast complete");
        }
        Ok((position, line))
    }

    /// Lines filled so far, initial first.
    pub fn lines(&self) -> &[CastLine] {
        self.lines.lines()
    }
}

impl CastProtocol for SequentialCast {
    const NAME: &'static str = "sequential";

    fn line(&self, position: LinePosition) -> Option<CastLine> {
        self.lines.lines().get(position.index()).copied()
    }

    fn reset(&mut self) {
        self.lines.clear();
    }

    fn filled(&self) -> usize {
        self.lines.filled()
    }
}
