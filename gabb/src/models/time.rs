//! Time-of-day encodings used by the API.
//!
//! Lock mode schedules send times as seconds since midnight, device
//! tracking windows as `HH:MM` strings.

use chrono::{NaiveTime, Timelike};

/// Seconds into the day for `time`. Sub-second precision is dropped.
pub fn seconds_since_midnight(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight()
}

/// `HH:MM` rendering of `time`. Seconds are dropped.
pub fn hh_mm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub(crate) mod hh_mm_option {
    use chrono::NaiveTime;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&super::hh_mm(*t)),
            None => serializer.serialize_none(),
        }
    }
}
