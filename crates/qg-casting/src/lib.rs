//! Liu Yao hexagram casting for Qigua.
//!
//! Three-digit draws stand in for three coins: an odd digit is the back of a
//! coin and an even digit the front, and the number of odd digits fixes the
//! line. Four protocols fill the six lines (random one at a time, random all
//! at once, typed codes, or direct polarity choice) and a complete set
//! identifies the primary and changed hexagrams.

/// The active protocol and protocol switching.
pub mod caster;
/// Casting configuration.
pub mod config;
/// Three-coin draws.
pub mod draw;
/// Error types for the casting crate.
pub mod error;
/// Six-line hexagrams and readings.
pub mod hexagram;
/// Line kinds.
pub mod line;
/// Casting protocols.
pub mod protocol;
/// Randomness service.
pub mod random;
/// The six spirits.
pub mod spirits;
/// Trigrams and King Wen identification.
pub mod trigram;

/// Re-exports of [`caster::Caster`] and [`caster::ProtocolKind`].
pub use caster::{Caster, ProtocolKind};
/// Re-export of [`config::CastConfig`].
pub use config::CastConfig;
/// Re-exports of the draw types.
pub use draw::{CoinFace, Draw};
/// Re-exports of [`error::CastError`] and [`error::CastResult`].
pub use error::{CastError, CastResult};
/// Re-exports of the hexagram types.
pub use hexagram::{CastStatus, Hexagram, HexagramInfo, LinePosition, LineStack, Reading};
/// Re-exports of the line types.
pub use line::{CastLine, LineKind};
/// Re-exports of the protocol types.
pub use protocol::{
    CastProtocol, DirectChoice, DirectEntry, NumericEntry, OneShotCast, SequentialCast,
};
/// Re-exports of the randomness types.
pub use random::{RandomnessService, RngService, ScriptedDraws};
/// Re-exports of the spirit types.
pub use spirits::{Spirit, six_spirits};
/// Re-exports of the trigram types.
pub use trigram::{Pattern, Trigram};
