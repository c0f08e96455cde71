//! Lock mode schedule models.
//!
//! Lock mode schedules are stored through the API's alarm endpoints, which
//! is why their payloads carry alarm fields with fixed values.

use chrono::{NaiveTime, Weekday};
use serde::Serialize;

use super::time::seconds_since_midnight;
use super::DeviceId;
use crate::error::{Error, Result};

/// Alarm type the API uses for lock mode schedules.
const LOCK_MODE_ALARM_TYPE: u8 = 4;

/// Days a schedule is active, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekDays([bool; 7]);

impl WeekDays {
    /// Create from seven flags, Monday through Sunday.
    pub fn new(days: [bool; 7]) -> Self {
        WeekDays(days)
    }

    /// Monday through Friday.
    pub fn school_days() -> Self {
        WeekDays([true, true, true, true, true, false, false])
    }

    /// All seven days.
    pub fn every_day() -> Self {
        WeekDays([true; 7])
    }

    /// Create from a slice, which must hold exactly seven flags.
    pub fn from_slice(days: &[bool]) -> Result<Self> {
        let days: [bool; 7] = days.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "week days need exactly 7 entries (Monday to Sunday), got {}",
                days.len()
            ))
        })?;
        Ok(WeekDays(days))
    }

    /// Turn a single day on or off.
    pub fn with(mut self, day: Weekday, active: bool) -> Self {
        self.0[day.num_days_from_monday() as usize] = active;
        self
    }

    /// Check if the schedule is active on `day`.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }
}

/// A complete lock mode schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct LockModeSchedule {
    pub week_days: WeekDays,
    pub name: String,
    /// Devices the schedule applies to.
    pub devices: Vec<DeviceId>,
    /// Daily start of lock mode.
    pub start: NaiveTime,
    /// Daily end of lock mode.
    pub end: NaiveTime,
    pub enabled: bool,
}

impl LockModeSchedule {
    pub(crate) fn payload(&self) -> LockModePayload<'_> {
        LockModePayload {
            week_days: Some(self.week_days),
            name: Some(&self.name),
            devices: Some(&self.devices),
            time: Some(seconds_since_midnight(self.start)),
            end_time: Some(seconds_since_midnight(self.end)),
            enabled: Some(self.enabled),
            ..LockModePayload::default()
        }
    }
}

/// Wire form shared by create and update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct LockModePayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_days: Option<WeekDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<&'a [DeviceId]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    pub silent_mode: bool,
    #[serde(rename = "Type")]
    pub kind: u8,
    pub school_mode: bool,
    pub focus_mode: bool,
}

impl Default for LockModePayload<'_> {
    fn default() -> Self {
        Self {
            week_days: None,
            name: None,
            devices: None,
            time: None,
            end_time: None,
            enabled: None,
            silent_mode: false,
            kind: LOCK_MODE_ALARM_TYPE,
            school_mode: true,
            focus_mode: false,
        }
    }
}
