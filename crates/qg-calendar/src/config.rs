use serde::{Deserialize, Serialize};

use crate::sexagenary::ZiSect;

/// Inclusive span of sexagenary years scanned by reverse resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEpoch {
    start: i32,
    end: i32,
}

impl SearchEpoch {
    /// First year of the default span.
    pub const DEFAULT_START: i32 = 1801;
    /// Last year of the default span (five full sexagenary cycles).
    pub const DEFAULT_END: i32 = 2100;

    /// A span from `start` to `end`; the bounds are swapped if reversed.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// First year, inclusive.
    pub fn start(&self) -> i32 {
        self.start
    }

    /// Last year, inclusive.
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Whether a year lies in the span.
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl Default for SearchEpoch {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_END)
    }
}

/// Where resolved instants get their minute and second from.
///
/// Pillars only pin an instant down to a two-hour period, so the minute and
/// second of every candidate have to come from somewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFill {
    /// The current wall-clock minute and second, sampled once per resolution.
    #[default]
    WallClock,
    /// A fixed minute and second.
    Fixed {
        /// Minute, 0-59.
        minute: u32,
        /// Second, 0-59.
        second: u32,
    },
}

/// Configuration for calendar resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Years scanned when resolving pillars to instants.
    pub epoch: SearchEpoch,
    /// Day boundary convention for the late 子 hour.
    pub sect: ZiSect,
    /// Minute/second policy for resolved instants.
    pub fill: TimeFill,
}

impl CalendarConfig {
    /// Set the search span.
    pub fn with_epoch(mut self, start: i32, end: i32) -> Self {
        self.epoch = SearchEpoch::new(start, end);
        self
    }

    /// Set the late 子 convention.
    pub fn with_sect(mut self, sect: ZiSect) -> Self {
        self.sect = sect;
        self
    }

    /// Use a fixed minute and second (clamped to 0-59) instead of the wall clock.
    pub fn with_fixed_time(mut self, minute: u32, second: u32) -> Self {
        self.fill = TimeFill::Fixed {
            minute: minute.min(59),
            second: second.min(59),
        };
        self
    }
}
