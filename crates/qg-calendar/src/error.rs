//! Error types for calendar conversion and resolution.

use qg_core::QgError;

/// Errors raised by calendar arithmetic and pillar resolution.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    /// A Gregorian date or time field is out of range.
    #[error("invalid gregorian moment: {0}")]
    InvalidGregorian(String),

    /// A lunar date does not exist (bad leap month, day 30 of a short month, ...).
    #[error("invalid lunar date: {0}")]
    InvalidLunar(String),

    /// The year lies outside the span the calendar can compute.
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),

    /// A candidate rank that the resolution does not contain.
    #[error("no candidate with rank {rank} (have {total})")]
    NoSuchCandidate {
        /// Requested 1-based rank.
        rank: usize,
        /// Number of candidates available.
        total: usize,
    },

    /// The calendar collaborator failed.
    #[error("calendar library failure: {0}")]
    Library(String),

    /// A stem-branch value was malformed.
    #[error(transparent)]
    Core(#[from] QgError),
}

/// Convenience result type for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
