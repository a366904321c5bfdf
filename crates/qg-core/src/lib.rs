//! Core types for Qigua: the sexagenary stem-branch vocabulary and the
//! four-pillar input model.
//!
//! This crate has no notion of calendars or clocks. It defines the symbols,
//! the pairing invariant that decides which stem-branch combinations exist,
//! the Five-Tiger and Five-Rat derivations, and a pure reducer for entering
//! four pillars field by field.

/// Earthly branches and their zodiac animals.
pub mod branch;
/// Month-stem and hour-stem derivation.
pub mod derive;
/// Error types used throughout the crate.
pub mod error;
/// Incremental four-pillar input state machine.
pub mod input;
/// Pillars, the sexagenary cycle, and the four-pillar set.
pub mod pillar;
/// Yin/Yang polarity shared by stems and branches.
pub mod polarity;
/// Heavenly stems.
pub mod stem;

/// Re-export the symbol types.
pub use branch::{Branch, Zodiac};
/// Re-export derivation rules.
pub use derive::{derive_hour_stem, derive_month_stem};
/// Re-export error types.
pub use error::{QgError, QgResult};
/// Re-export the input model.
pub use input::{Completion, Field, InputEvent, Outcome, PillarInput, Slot};
/// Re-export pillar types.
pub use pillar::{FourPillars, Pillar, PillarKind, SexagenaryCycle};
/// Re-export polarity helpers.
pub use polarity::{Polarity, same_polarity};
/// Re-export the stem type.
pub use stem::Stem;
