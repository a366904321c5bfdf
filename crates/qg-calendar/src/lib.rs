//! Calendar conversion and pillar resolution for Qigua.
//!
//! Converts between Gregorian dates, the Chinese lunisolar calendar and
//! solar-term-exact four pillars, and resolves a complete set of pillars
//! back to the Gregorian instants that carry them. All civil times are
//! China Standard Time (UTC+8) on the proleptic Gregorian calendar.
//!
//! The [`CalendarLibrary`] trait is the boundary the rest of the workspace
//! talks to; [`StandardCalendar`] implements it from low-precision solar and
//! lunar theory.

/// Solar longitude, new moons and Julian day conversions.
pub mod astro;
/// Wall-clock capability.
pub mod clock;
/// Resolution configuration.
pub mod config;
/// Error types for the calendar crate.
pub mod error;
/// Calendar instants and moment input.
pub mod instant;
/// The calendar-library trait and built-in implementation.
pub mod library;
/// The lunisolar calendar.
pub mod lunar;
/// Pillars to instants.
pub mod resolve;
/// Exact pillars and the pillar search.
pub mod sexagenary;
/// The 24 solar terms.
pub mod terms;

/// Re-exports of [`clock::Clock`], [`clock::FixedClock`] and [`clock::SystemClock`].
pub use clock::{Clock, FixedClock, SystemClock};
/// Re-exports of the configuration types.
pub use config::{CalendarConfig, SearchEpoch, TimeFill};
/// Re-exports of [`error::CalendarError`] and [`error::CalendarResult`].
pub use error::{CalendarError, CalendarResult};
/// Re-exports of the instant types.
pub use instant::{CalendarInstant, HourBranch, LunarDateTime, Moment, ZiHalf};
/// Re-exports of the library boundary.
pub use library::{CalendarLibrary, StandardCalendar};
/// Re-exports of the lunar calendar types.
pub use lunar::{LunarDate, LunarMonth, LunarYear};
/// Re-exports of the resolution types.
pub use resolve::{Candidate, Resolution, resolve, select};
/// Re-exports of the pillar helpers.
pub use sexagenary::{ZiSect, day_pillar, exact_pillars, year_pillar};
/// Re-exports of the solar term types.
pub use terms::{SolarTerm, TermEvent};
