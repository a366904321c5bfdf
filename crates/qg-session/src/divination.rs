//! The exported record of a finished divination.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use qg_calendar::CalendarInstant;
use qg_casting::{Hexagram, Reading};
use qg_core::FourPillars;

use crate::session::SessionId;

/// Completed pillars, the chosen moment and the cast hexagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Divination {
    /// Session that produced the record.
    pub session: SessionId,
    /// When the record was exported, UTC+8.
    pub exported_at: NaiveDateTime,
    /// The four pillars.
    pub pillars: FourPillars,
    /// The selected or described moment, if any.
    pub instant: Option<CalendarInstant>,
    /// The six lines.
    pub hexagram: Hexagram,
    /// Hexagram identification.
    pub reading: Reading,
}

impl Divination {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
