//! Creation/modification stamps shared by every entity.

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::clock::SharedClock;

/// Tracks when an entity was created and last modified.
///
/// `created` is written once, at construction. `modified` starts out unset
/// and is re-stamped by every mutating setter, even when the new field
/// value equals the old one.
#[derive(Clone, Debug)]
pub struct Stamps {
    clock: SharedClock,
    created: DateTime<Utc>,
    modified: Option<DateTime<Utc>>,
}

impl Stamps {
    /// Fresh stamps: `created = now`, never modified.
    pub fn new(clock: SharedClock) -> Self {
        let created = clock.now();
        Self {
            clock,
            created,
            modified: None,
        }
    }

    /// Reconstruction: both instants supplied by the caller.
    pub fn restore(
        clock: SharedClock,
        created: DateTime<Utc>,
        modified: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            clock,
            created,
            modified,
        }
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn modified(&self) -> Option<DateTime<Utc>> {
        self.modified
    }

    /// Record a mutation at the clock's current instant.
    pub fn touch(&mut self) {
        self.modified = Some(self.clock.now());
    }

    /// Handle to the clock these stamps were built with.
    pub fn clock(&self) -> SharedClock {
        self.clock.clone()
    }
}

/// Serializes as a two-entry map so entities can `#[serde(flatten)]` the
/// stamps into their own camelCase documents.
impl Serialize for Stamps {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("createdDate", &self.created)?;
        map.serialize_entry("modifiedDate", &self.modified)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, TimeZone};

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn fresh_stamps_are_unmodified() {
        let clock = ManualClock::starting_at(instant());
        let stamps = Stamps::new(clock);
        assert_eq!(stamps.created(), instant());
        assert_eq!(stamps.modified(), None);
    }

    #[test]
    fn touch_records_the_current_instant() {
        let clock = ManualClock::starting_at(instant());
        let mut stamps = Stamps::new(clock.clone());

        clock.advance(Duration::seconds(5));
        stamps.touch();

        assert_eq!(stamps.modified(), Some(instant() + Duration::seconds(5)));
        // Creation never moves.
        assert_eq!(stamps.created(), instant());
    }

    #[test]
    fn successive_touches_are_non_decreasing() {
        let clock = ManualClock::starting_at(instant());
        let mut stamps = Stamps::new(clock.clone());

        let mut seen = Vec::new();
        for step in 0..5 {
            clock.advance(Duration::milliseconds(step * 10));
            stamps.touch();
            seen.push(stamps.modified().unwrap());
        }

        for pair in seen.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn restore_keeps_supplied_instants() {
        let clock = ManualClock::starting_at(instant() + Duration::days(10));
        let modified = Some(instant() + Duration::hours(1));
        let stamps = Stamps::restore(clock, instant(), modified);
        assert_eq!(stamps.created(), instant());
        assert_eq!(stamps.modified(), modified);
    }

    #[test]
    fn serializes_as_camel_case_map() {
        let clock = ManualClock::starting_at(instant());
        let stamps = Stamps::new(clock);
        let json = serde_json::to_value(&stamps).unwrap();
        assert!(json.get("createdDate").is_some());
        assert!(json.get("modifiedDate").unwrap().is_null());
    }
}
