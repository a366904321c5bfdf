//! The active casting protocol.

use serde::{Deserialize, Serialize};
use tracing::info;

use qg_core::Polarity;

use crate::error::{CastError, CastResult};
use crate::hexagram::{CastStatus, Hexagram, LinePosition};
use crate::line::CastLine;
use crate::protocol::{
    CastProtocol, DirectChoice, DirectEntry, NumericEntry, OneShotCast, SequentialCast,
};
use crate::random::RandomnessService;

/// Which protocol is casting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtocolKind {
    /// One random line per request.
    #[default]
    Sequential,
    /// Six random lines at once.
    OneShot,
    /// User-entered three-digit codes.
    Numeric,
    /// Lines chosen by polarity.
    Direct,
}

impl ProtocolKind {
    /// All protocols.
    pub const ALL: [ProtocolKind; 4] = [Self::Sequential, Self::OneShot, Self::Numeric, Self::Direct];

    /// Short name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => SequentialCast::NAME,
            Self::OneShot => OneShotCast::NAME,
            Self::Numeric => NumericEntry::NAME,
            Self::Direct => DirectEntry::NAME,
        }
    }
}

impl std::fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ProtocolKind {
    type Err = CastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CastError::InvalidProtocol(s.trim().to_string()))
    }
}

/// The protocol in use and its local state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "protocol", rename_all = "kebab-case")]
pub enum Caster {
    /// See [`SequentialCast`].
    Sequential(SequentialCast),
    /// See [`OneShotCast`].
    OneShot(OneShotCast),
    /// See [`NumericEntry`].
    Numeric(NumericEntry),
    /// See [`DirectEntry`].
    Direct(DirectEntry),
}

impl Default for Caster {
    fn default() -> Self {
        Self::new(ProtocolKind::default())
    }
}

impl Caster {
    /// A fresh caster for a protocol.
    pub fn new(kind: ProtocolKind) -> Self {
        match kind {
            ProtocolKind::Sequential => Self::Sequential(SequentialCast::new()),
            ProtocolKind::OneShot => Self::OneShot(OneShotCast::new()),
            ProtocolKind::Numeric => Self::Numeric(NumericEntry::new()),
            ProtocolKind::Direct => Self::Direct(DirectEntry::new()),
        }
    }

    /// The active protocol.
    pub fn kind(&self) -> ProtocolKind {
        match self {
            Self::Sequential(_) => ProtocolKind::Sequential,
            Self::OneShot(_) => ProtocolKind::OneShot,
            Self::Numeric(_) => ProtocolKind::Numeric,
            Self::Direct(_) => ProtocolKind::Direct,
        }
    }

    /// Switch protocol. Any state of the previous protocol is discarded,
    /// even when switching to the same one.
    pub fn switch(&mut self, kind: ProtocolKind) {
        info!(from = %self.kind(), to = %kind, "casting protocol switched");
        *self = Self::new(kind);
    }

    /// Empty the active protocol.
    pub fn reset(&mut self) {
        match self {
            Self::Sequential(p) => p.reset(),
            Self::OneShot(p) => p.reset(),
            Self::Numeric(p) => p.reset(),
            Self::Direct(p) => p.reset(),
        }
    }

    /// Progress of the active protocol.
    pub fn status(&self) -> CastStatus {
        match self {
            Self::Sequential(p) => p.status(),
            Self::OneShot(p) => p.status(),
            Self::Numeric(p) => p.status(),
            Self::Direct(p) => p.status(),
        }
    }

    /// The line at a position, if filled.
    pub fn line(&self, position: LinePosition) -> Option<CastLine> {
        match self {
            Self::Sequential(p) => p.line(position),
            Self::OneShot(p) => p.line(position),
            Self::Numeric(p) => p.line(position),
            Self::Direct(p) => p.line(position),
        }
    }

    /// The finished hexagram, only when complete.
    pub fn hexagram(&self) -> CastResult<Hexagram> {
        match self {
            Self::Sequential(p) => p.hexagram(),
            Self::OneShot(p) => p.hexagram(),
            Self::Numeric(p) => p.hexagram(),
            Self::Direct(p) => p.hexagram(),
        }
    }

    /// Draw the next line. Sequential only.
    pub fn cast_next<R: RandomnessService + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> CastResult<(LinePosition, CastLine)> {
        match self {
            Self::Sequential(p) => p.cast_next(rng),
            _ => Err(self.wrong("cast_next")),
        }
    }

    /// Draw all six lines. One-shot only.
    pub fn cast_all<R: RandomnessService + ?Sized>(&mut self, rng: &mut R) -> CastResult<Hexagram> {
        match self {
            Self::OneShot(p) => p.cast_all(rng),
            _ => Err(self.wrong("cast_all")),
        }
    }

    /// Enter one digit. Numeric only.
    pub fn enter(&mut self, position: LinePosition, ch: char) -> CastResult<()> {
        match self {
            Self::Numeric(p) => p.enter(position, ch),
            _ => Err(self.wrong("enter")),
        }
    }

    /// Enter one digit at the active position. Numeric only.
    pub fn push_digit(&mut self, ch: char) -> CastResult<LinePosition> {
        match self {
            Self::Numeric(p) => p.push_digit(ch),
            _ => Err(self.wrong("push_digit")),
        }
    }

    /// Enter a whole code at a position. Numeric only.
    pub fn set_code(&mut self, position: LinePosition, code: &str) -> CastResult<()> {
        match self {
            Self::Numeric(p) => p.set_code(position, code),
            _ => Err(self.wrong("set_code")),
        }
    }

    /// Clear the active numeric position. Numeric only.
    pub fn clear(&mut self, position: LinePosition) -> CastResult<()> {
        match self {
            Self::Numeric(p) => p.clear(position),
            _ => Err(self.wrong("clear")),
        }
    }

    /// Toggle a polarity at a position. Direct only.
    pub fn toggle(&mut self, position: LinePosition, polarity: Polarity) -> CastResult<DirectChoice> {
        match self {
            Self::Direct(p) => Ok(p.toggle(position, polarity)),
            _ => Err(self.wrong("toggle")),
        }
    }

    fn wrong(&self, operation: &'static str) -> CastError {
        CastError::WrongProtocol {
            operation,
            protocol: self.kind().name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RngService;

    #[test]
    fn parse_kinds() {
        assert_eq!("one-shot".parse::<ProtocolKind>(), Ok(ProtocolKind::OneShot));
        assert_eq!("Numeric".parse::<ProtocolKind>(), Ok(ProtocolKind::Numeric));
        assert!("coins".parse::<ProtocolKind>().is_err());
    }

    #[test]
    fn switching_clears_state() {
        let mut rng = RngService::seeded(5);
        let mut caster = Caster::new(ProtocolKind::Sequential);
        caster.cast_next(&mut rng).unwrap();
        caster.cast_next(&mut rng).unwrap();
        assert_eq!(caster.status(), CastStatus::Incomplete { filled: 2 });

        caster.switch(ProtocolKind::Sequential);
        assert_eq!(caster.status(), CastStatus::Incomplete { filled: 0 });

        caster.switch(ProtocolKind::Direct);
        caster.toggle(LinePosition::Initial, Polarity::Yin).unwrap();
        caster.switch(ProtocolKind::Numeric);
        assert_eq!(caster.kind(), ProtocolKind::Numeric);
        assert_eq!(caster.line(LinePosition::Initial), None);
    }

    #[test]
    fn operations_are_protocol_specific() {
        let mut rng = RngService::seeded(5);
        let mut caster = Caster::new(ProtocolKind::Direct);
        assert_eq!(
            caster.cast_next(&mut rng),
            Err(CastError::WrongProtocol {
                operation: "cast_next",
                protocol: "direct",
            })
        );
        assert!(caster.enter(LinePosition::Initial, '1').is_err());
        assert!(caster.cast_all(&mut rng).is_err());
    }

    #[test]
    fn reset_keeps_protocol() {
        let mut caster = Caster::new(ProtocolKind::OneShot);
        caster.cast_all(&mut RngService::seeded(8)).unwrap();
        assert!(caster.status().is_complete());
        caster.reset();
        assert_eq!(caster.kind(), ProtocolKind::OneShot);
        assert!(caster.hexagram().is_err());
    }
}
