//! Wall-clock abstraction used to stamp modification times.
//!
//! The clock is an explicit dependency of every entity so tests can drive
//! time deterministically instead of sleeping between assertions.

use core::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

/// Source of "now".
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Shared handle to a clock; cloned into every entity that needs one.
pub type SharedClock = Arc<dyn Clock>;

/// Production clock backed by the system time.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Handle to the default production clock.
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Deterministic clock for tests: reads return the held instant until the
/// clock is advanced or set.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(now),
        })
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock mutex poisoned");
        *now = *now + by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().expect("clock mutex poisoned") = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock mutex poisoned")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn manual_clock_holds_its_instant() {
        let clock = ManualClock::starting_at(instant());
        assert_eq!(clock.now(), instant());
        assert_eq!(clock.now(), instant());
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::starting_at(instant());
        clock.advance(Duration::seconds(30));
        assert_eq!(clock.now(), instant() + Duration::seconds(30));
    }

    #[test]
    fn manual_clock_can_be_set() {
        let clock = ManualClock::starting_at(instant());
        let later = instant() + Duration::days(2);
        clock.set(later);
        assert_eq!(clock.now(), later);
    }
}
