//! Caller-side retention of the last successful reading.
//!
//! The extractor itself is stateless: each scan either yields a reading or
//! nothing. Callers that want "last known good value" semantics hold one
//! of these stores per source and feed every scan outcome into it. The
//! store lives for the process only; restoring state across restarts is a
//! collaborator concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A successfully extracted reading and when it was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub value: f64,
    pub detected_at: DateTime<Utc>,
}

impl Reading {
    /// Detection timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub fn detected_at_display(&self) -> String {
        self.detected_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Retains the most recent successful reading for one source.
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    last: Option<Reading>,
}

impl ReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a scan outcome into the store. A found value (including zero)
    /// replaces the retained reading; an absent result leaves the previous
    /// reading in place as stale-but-available.
    pub fn update(&mut self, value: Option<f64>) -> Option<&Reading> {
        if let Some(value) = value {
            self.record(value);
        }
        self.last()
    }

    /// Record a reading taken now.
    pub fn record(&mut self, value: f64) {
        self.record_at(value, Utc::now());
    }

    /// Record a reading with an explicit timestamp.
    pub fn record_at(&mut self, value: f64, detected_at: DateTime<Utc>) {
        self.last = Some(Reading { value, detected_at });
    }

    pub fn last(&self) -> Option<&Reading> {
        self.last.as_ref()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.last.as_ref().map(|r| r.value)
    }

    pub fn last_detection(&self) -> Option<DateTime<Utc>> {
        self.last.as_ref().map(|r| r.detected_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_empty() {
        let store = ReadingStore::new();
        assert_eq!(store.last_value(), None);
        assert_eq!(store.last_detection(), None);
    }

    #[test]
    fn test_absent_scan_keeps_previous_reading() {
        let mut store = ReadingStore::new();
        store.update(Some(123.45));
        let first_detection = store.last_detection();

        let retained = store.update(None).cloned();
        assert_eq!(retained.map(|r| r.value), Some(123.45));
        assert_eq!(store.last_detection(), first_detection);
    }

    #[test]
    fn test_new_reading_replaces_old() {
        let mut store = ReadingStore::new();
        store.update(Some(1.0));
        store.update(Some(2.0));
        assert_eq!(store.last_value(), Some(2.0));
    }

    #[test]
    fn test_zero_is_a_reading_not_absence() {
        let mut store = ReadingStore::new();
        store.update(Some(123.45));
        store.update(Some(0.0));
        assert_eq!(store.last_value(), Some(0.0));
    }

    #[test]
    fn test_timestamp_display_format() {
        let mut store = ReadingStore::new();
        let at = DateTime::parse_from_rfc3339("2024-06-01T12:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        store.record_at(1.23, at);

        let reading = store.last().unwrap();
        assert_eq!(reading.detected_at_display(), "2024-06-01 12:30:00");
    }
}
