//! One-off agenda events and their store.

mod store;

pub use store::{EventStore, EVENTS_KEY};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A titled entry scheduled on a date at a time of day.
///
/// Events with identical content are still distinct by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    /// Wall-clock label, no timezone.
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
}

/// Parses a `HH:MM` time label.
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// `HH:MM` serde representation for `NaiveTime`.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid time '{raw}', expected HH:MM")))
    }
}
