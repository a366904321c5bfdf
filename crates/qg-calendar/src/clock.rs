//! Wall-clock capability.
//!
//! Resolution needs "now" only to fill in minutes and seconds. Passing the
//! clock in keeps every other part of the crate deterministic.

use chrono::{NaiveDateTime, TimeDelta, Utc};

/// A source of the current civil time in UTC+8.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> NaiveDateTime;
}

/// The host's clock, shifted to China Standard Time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc() + TimeDelta::hours(8)
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn fixed_clock_is_frozen() {
        let t = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 41, 7)
            .unwrap();
        let clock = FixedClock(t);
        assert_eq!(clock.now(), t);
        assert_eq!((&clock).now(), t);
    }

    #[test]
    fn system_clock_is_ahead_of_utc() {
        let before = Utc::now().naive_utc();
        let now = SystemClock.now();
        let diff = now - before;
        assert!(diff >= TimeDelta::hours(8) && diff < TimeDelta::hours(8) + TimeDelta::minutes(1));
    }
}
