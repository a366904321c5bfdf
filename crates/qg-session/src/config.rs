//! Configuration for a divination session.

use serde::{Deserialize, Serialize};

use qg_calendar::{CalendarConfig, ZiSect};
use qg_casting::{CastConfig, ProtocolKind};

/// Configuration for a divination session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Calendar resolution settings.
    pub calendar: CalendarConfig,
    /// Casting settings.
    pub cast: CastConfig,
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.cast = self.cast.with_seed(seed);
        self
    }

    /// Set the starting casting protocol.
    pub fn with_protocol(mut self, protocol: ProtocolKind) -> Self {
        self.cast = self.cast.with_protocol(protocol);
        self
    }

    /// Set the years searched when resolving pillars.
    pub fn with_epoch(mut self, start: i32, end: i32) -> Self {
        self.calendar = self.calendar.with_epoch(start, end);
        self
    }

    /// Set the late 子 convention.
    pub fn with_sect(mut self, sect: ZiSect) -> Self {
        self.calendar = self.calendar.with_sect(sect);
        self
    }

    /// Use a fixed minute and second for resolved candidates.
    pub fn with_fixed_time(mut self, minute: u32, second: u32) -> Self {
        self.calendar = self.calendar.with_fixed_time(minute, second);
        self
    }
}

#[cfg(test)]
mod tests {
    use qg_calendar::TimeFill;

    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.cast.seed, None);
        assert_eq!(cfg.calendar.sect, ZiSect::NextDay);
        assert_eq!(cfg.calendar.fill, TimeFill::WallClock);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default()
            .with_seed(7)
            .with_protocol(ProtocolKind::Numeric)
            .with_epoch(1900, 2000)
            .with_sect(ZiSect::SameDay)
            .with_fixed_time(75, 3);
        assert_eq!(cfg.cast.seed, Some(7));
        assert_eq!(cfg.cast.protocol, ProtocolKind::Numeric);
        assert_eq!(cfg.calendar.epoch.start(), 1900);
        assert_eq!(cfg.calendar.epoch.end(), 2000);
        assert_eq!(cfg.calendar.sect, ZiSect::SameDay);
        assert_eq!(
            cfg.calendar.fill,
            TimeFill::Fixed {
                minute: 59,
                second: 3
            }
        );
    }
}
