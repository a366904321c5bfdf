//! The four casting protocols.
//!
//! Every protocol fills the same six positions, initial first, and only
//! yields a [`Hexagram`] once all six are filled.

mod direct;
mod numeric;
mod one_shot;
mod sequential;

pub use direct::{DirectChoice, DirectEntry};
pub use numeric::NumericEntry;
pub use one_shot::OneShotCast;
pub use sequential::SequentialCast;

use crate::error::{CastError, CastResult};
use crate::hexagram::{CastStatus, Hexagram, LinePosition};
use crate::line::CastLine;

/// Shared view over a casting protocol's state.
pub trait CastProtocol {
    /// Short protocol name used in messages.
    const NAME: &'static str;

    /// The line at a position, if it has been filled.
    fn line(&self, position: LinePosition) -> Option<CastLine>;

    /// Return to the empty state.
    fn reset(&mut self);

    /// Number of filled positions.
    fn filled(&self) -> usize {
        LinePosition::ALL
            .into_iter()
            .filter(|p| self.line(*p).is_some())
            .count()
    }

    /// Current progress.
    fn status(&self) -> CastStatus {
        CastStatus::from_filled(self.filled())
    }

    /// The six-line hexagram, only when complete.
    fn hexagram(&self) -> CastResult<Hexagram> {
        let lines: Option<Vec<CastLine>> =
            LinePosition::ALL.into_iter().map(|p| self.line(p)).collect();
        match lines {
            Some(lines) => Hexagram::from_lines(&lines),
            None => Err(CastError::Incomplete {
                filled: self.filled(),
            }),
        }
    }
}
