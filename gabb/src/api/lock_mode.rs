//! Lock mode schedule API.

use std::sync::Arc;

use chrono::NaiveTime;
use reqwest::Method;
use serde_json::Value;

use crate::{
    client::GabbClientInner,
    error::{Error, Result},
    models::{
        time::seconds_since_midnight, DeviceId, LockModePayload, LockModeSchedule, ScheduleId,
        WeekDays,
    },
};

/// API for lock mode schedules.
///
/// Schedules are stored through the API's alarm endpoints.
pub struct LockModeApi {
    client: Arc<GabbClientInner>,
}

impl LockModeApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// List lock mode schedules.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(Method::GET, "alarms").send().await
    }

    /// Create a lock mode schedule.
    pub async fn create(&self, schedule: &LockModeSchedule) -> Result<Value> {
        self.client
            .call(Method::POST, "alarms")
            .json(&schedule.payload())
            .send()
            .await
    }

    /// Change an existing schedule.
    pub fn update(&self, id: impl Into<ScheduleId>) -> LockModeUpdateBuilder {
        LockModeUpdateBuilder {
            client: self.client.clone(),
            id: id.into(),
            week_days: None,
            name: None,
            devices: None,
            start: None,
            end: None,
            enabled: None,
        }
    }

    /// Delete a schedule.
    pub async fn delete(&self, id: impl Into<ScheduleId>) -> Result<Value> {
        let path = format!("alarms/{}", id.into());
        self.client.call(Method::DELETE, &path).send().await
    }
}

/// Builder for lock mode schedule updates. Unset fields are left unchanged.
pub struct LockModeUpdateBuilder {
    client: Arc<GabbClientInner>,
    id: ScheduleId,
    week_days: Option<WeekDays>,
    name: Option<String>,
    devices: Option<Vec<DeviceId>>,
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    enabled: Option<bool>,
}

impl LockModeUpdateBuilder {
    /// Set the active days.
    pub fn week_days(mut self, days: WeekDays) -> Self {
        self.week_days = Some(days);
        self
    }

    /// Set the name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the devices the schedule applies to.
    pub fn devices(mut self, devices: impl IntoIterator<Item = DeviceId>) -> Self {
        self.devices = Some(devices.into_iter().collect());
        self
    }

    /// Set the daily start time.
    pub fn start(mut self, time: NaiveTime) -> Self {
        self.start = Some(time);
        self
    }

    /// Set the daily end time.
    pub fn end(mut self, time: NaiveTime) -> Self {
        self.end = Some(time);
        self
    }

    /// Enable or disable the schedule.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Value> {
        let payload = LockModePayload {
            week_days: self.week_days,
            name: self.name.as_deref(),
            devices: self.devices.as_deref(),
            time: self.start.map(seconds_since_midnight),
            end_time: self.end.map(seconds_since_midnight),
            enabled: self.enabled,
            ..LockModePayload::default()
        };

        if payload.week_days.is_none()
            && payload.name.is_none()
            && payload.devices.is_none()
            && payload.time.is_none()
            && payload.end_time.is_none()
            && payload.enabled.is_none()
        {
            return Err(Error::InvalidArgument("no schedule fields to update".into()));
        }

        let path = format!("alarms/{}", self.id);
        self.client
            .call(Method::PUT, &path)
            .json(&payload)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::connect;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_schedule() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("POST"))
            .and(path("/v2/alarms"))
            .and(body_json(json!({
                "WeekDays": [true, true, true, true, true, false, false],
                "Name": "School",
                "Devices": [555555],
                "Time": 28800,
                "EndTime": 54000,
                "Enabled": true,
                "SilentMode": false,
                "Type": 4,
                "SchoolMode": true,
                "FocusMode": false,
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let schedule = LockModeSchedule {
            week_days: WeekDays::school_days(),
            name: "School".into(),
            devices: vec![DeviceId(555555)],
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            enabled: true,
        };
        client.lock_modes().create(&schedule).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_schedule_sends_only_changed_fields() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("PUT"))
            .and(path("/v2/alarms/42"))
            .and(body_json(json!({
                "Enabled": false,
                "EndTime": 3600,
                "SilentMode": false,
                "Type": 4,
                "SchoolMode": true,
                "FocusMode": false,
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client
            .lock_modes()
            .update(42u64)
            .enabled(false)
            .end(NaiveTime::from_hms_opt(1, 0, 0).unwrap())
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        let result = client.lock_modes().update(42u64).send().await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
