//! Device profile and settings models.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Serialize, Serializer};

use super::time::hh_mm_option;

/// Gender of the child wearing the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Numeric code used by the API.
    pub fn code(self) -> u8 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Partial update of a device profile. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Sent as milliseconds since the Unix epoch.
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub birth_date: Option<DateTime<Utc>>,
}

impl ProfileUpdate {
    /// Set the birth date; a naive timestamp is taken as UTC.
    pub fn set_birth_date(&mut self, birth_date: NaiveDateTime) {
        self.birth_date = Some(birth_date.and_utc());
    }

    /// Check if nothing would be changed.
    pub fn is_empty(&self) -> bool {
        self.gender.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.birth_date.is_none()
    }
}

/// Partial update of device settings. Unset fields are left unchanged.
///
/// Durations and intervals are in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    /// Track at the faster, battery-hungry active interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tracking_enable: Option<bool>,
    /// How long active tracking lasts once enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tracking_duration: Option<u32>,
    /// Active tracking interval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_tracking_frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery_power_saving_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_enabled: Option<bool>,
    /// Daily start of tracking, sent as `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "hh_mm_option::serialize")]
    pub tracking_start_time: Option<NaiveTime>,
    /// Daily end of tracking, sent as `HH:MM`.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "hh_mm_option::serialize")]
    pub tracking_end_time: Option<NaiveTime>,
    /// Standard interval between location reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub silent_mode: Option<bool>,
}

impl SettingsUpdate {
    /// Check if nothing would be changed.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
