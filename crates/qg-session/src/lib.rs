//! Divination sessions for Qigua.
//!
//! A [`DivinationSession`] ties the pieces together: four-pillar entry with
//! automatic resolution to Gregorian candidates, moment description by date,
//! a casting engine, and export of the finished [`Divination`].

pub mod commands;
pub mod config;
pub mod divination;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use divination::Divination;
pub use error::{SessionError, SessionResult};
pub use session::{DivinationSession, SessionId};
