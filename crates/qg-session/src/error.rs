//! Error types for divination sessions.

use thiserror::Error;

use qg_core::Field;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur during a divination session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A candidate was selected before any pillars were resolved.
    #[error("no resolved pillars to select from")]
    NoResolution,

    /// Export was requested before the pillars and the hexagram were both complete.
    #[error("divination incomplete: {} pillar field(s) missing, {lines}/6 lines cast", .fields.len())]
    Incomplete {
        /// Pillar fields still empty.
        fields: Vec<Field>,
        /// Hexagram lines filled so far.
        lines: usize,
    },

    /// Invalid command argument.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Sexagenary symbol error.
    #[error(transparent)]
    Core(#[from] qg_core::QgError),

    /// Calendar error.
    #[error(transparent)]
    Calendar(#[from] qg_calendar::CalendarError),

    /// Casting error.
    #[error(transparent)]
    Cast(#[from] qg_casting::CastError),

    /// Export serialization error.
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}
