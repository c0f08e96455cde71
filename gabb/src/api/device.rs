//! Device API: profile, settings and goals.

use std::sync::Arc;

use chrono::{NaiveDateTime, NaiveTime};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{
    client::GabbClientInner,
    error::{Error, Result},
    models::{DeviceId, Gender, ProfileUpdate, SettingsUpdate},
};

/// API for device operations.
pub struct DeviceApi {
    client: Arc<GabbClientInner>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StepGoal {
    step_goal: u32,
}

impl DeviceApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// Get the profile of the child using the device.
    pub async fn profile(&self, device: impl Into<DeviceId>) -> Result<Value> {
        let path = format!("device/profile/{}", device.into());
        self.client.call(Method::GET, &path).send().await
    }

    /// Update the device profile.
    pub fn update_profile(&self, device: impl Into<DeviceId>) -> ProfileUpdateBuilder {
        ProfileUpdateBuilder {
            client: self.client.clone(),
            device: device.into(),
            update: ProfileUpdate::default(),
        }
    }

    /// Get device settings.
    pub async fn settings(&self, device: impl Into<DeviceId>) -> Result<Value> {
        let path = format!("settings/{}", device.into());
        self.client.call(Method::GET, &path).send().await
    }

    /// Update device settings.
    pub fn update_settings(&self, device: impl Into<DeviceId>) -> SettingsUpdateBuilder {
        SettingsUpdateBuilder {
            client: self.client.clone(),
            device: device.into(),
            update: SettingsUpdate::default(),
        }
    }

    /// Get the goals of a device. Only the step goal is used by Gabb.
    pub async fn goals(&self, device: impl Into<DeviceId>) -> Result<Value> {
        let path = format!("device/goals/{}", device.into());
        self.client.call(Method::GET, &path).send().await
    }

    /// Set the daily step goal of a device.
    pub async fn set_step_goal(&self, device: impl Into<DeviceId>, steps: u32) -> Result<Value> {
        let path = format!("device/goals/{}", device.into());
        self.client
            .call(Method::POST, &path)
            .json(&StepGoal { step_goal: steps })
            .send()
            .await
    }
}

/// Builder for device profile updates.
pub struct ProfileUpdateBuilder {
    client: Arc<GabbClientInner>,
    device: DeviceId,
    update: ProfileUpdate,
}

impl ProfileUpdateBuilder {
    /// Set the gender.
    pub fn gender(mut self, gender: Gender) -> Self {
        self.update.gender = Some(gender);
        self
    }

    /// Set the first name.
    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.update.first_name = Some(name.into());
        self
    }

    /// Set the last name.
    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.update.last_name = Some(name.into());
        self
    }

    /// Set the birth date, taken as UTC.
    pub fn birth_date(mut self, birth_date: NaiveDateTime) -> Self {
        self.update.set_birth_date(birth_date);
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Value> {
        if self.update.is_empty() {
            return Err(Error::InvalidArgument("no profile fields to update".into()));
        }

        let path = format!("device/update-profile/{}", self.device);
        self.client
            .call(Method::PUT, &path)
            .json(&self.update)
            .send()
            .await
    }
}

/// Builder for device settings updates.
pub struct SettingsUpdateBuilder {
    client: Arc<GabbClientInner>,
    device: DeviceId,
    update: SettingsUpdate,
}

impl SettingsUpdateBuilder {
    /// Enable or disable active (faster) tracking.
    pub fn active_tracking(mut self, enabled: bool) -> Self {
        self.update.active_tracking_enable = Some(enabled);
        self
    }

    /// How long active tracking lasts, in seconds.
    pub fn active_tracking_duration(mut self, seconds: u32) -> Self {
        self.update.active_tracking_duration = Some(seconds);
        self
    }

    /// Active tracking interval, in seconds.
    pub fn active_tracking_frequency(mut self, seconds: u32) -> Self {
        self.update.active_tracking_frequency = Some(seconds);
        self
    }

    /// Enable or disable battery saving mode.
    pub fn battery_power_saving(mut self, enabled: bool) -> Self {
        self.update.battery_power_saving_mode = Some(enabled);
        self
    }

    /// Enable or disable tracking.
    pub fn tracking(mut self, enabled: bool) -> Self {
        self.update.tracking_enabled = Some(enabled);
        self
    }

    /// Daily tracking window.
    pub fn tracking_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.update.tracking_start_time = Some(start);
        self.update.tracking_end_time = Some(end);
        self
    }

    /// Standard tracking interval, in seconds.
    pub fn tracking_interval(mut self, seconds: u32) -> Self {
        self.update.tracking_interval = Some(seconds);
        self
    }

    /// Enable or disable silent mode.
    pub fn silent_mode(mut self, enabled: bool) -> Self {
        self.update.silent_mode = Some(enabled);
        self
    }

    /// Execute the request.
    pub async fn send(self) -> Result<Value> {
        if self.update.is_empty() {
            return Err(Error::InvalidArgument("no settings to update".into()));
        }

        let path = format!("settings/{}", self.device);
        self.client
            .call(Method::PUT, &path)
            .json(&self.update)
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
    async fn test_update_settings() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("PUT"))
            .and(path("/v2/settings/555555"))
            .and(body_json(json!({
                "trackingEnabled": true,
                "trackingStartTime": "00:00",
                "trackingEndTime": "23:59",
                "trackingInterval": 900,
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client
            .devices()
            .update_settings(555555u64)
            .tracking(true)
            .tracking_window(
                NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(23, 59, 59).unwrap(),
            )
            .tracking_interval(900)
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_empty_update_is_rejected() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        let result = client.devices().update_settings(1u64).send().await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));

        let result = client.devices().update_profile(1u64).send().await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_update_profile() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("PUT"))
            .and(path("/v2/device/update-profile/555555"))
            .and(body_json(json!({"gender": 1, "lastName": "Smith"})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client
            .devices()
            .update_profile(555555u64)
            .gender(Gender::Male)
            .last_name("Smith")
            .send()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_set_step_goal() {
        let server = MockServer::start().await;
        let client = connect(&server).await;

        Mock::given(method("POST"))
            .and(path("/v2/device/goals/555555"))
            .and(body_json(json!({"stepGoal": 8000})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client.devices().set_step_goal(555555u64, 8000).await.unwrap();
    }
}
