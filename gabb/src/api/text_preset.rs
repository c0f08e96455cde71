//! Text preset API.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{
    client::GabbClientInner,
    error::{Error, Result},
    models::{DeviceId, PresetId},
};

/// API for the canned text messages a watch can send.
pub struct TextPresetApi {
    client: Arc<GabbClientInner>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PresetPayload<'a> {
    device_id: DeviceId,
    #[serde(skip_serializing_if = "Option::is_none")]
    preset_id: Option<PresetId>,
    message: &'a str,
}

fn preset_path(device: DeviceId, preset: Option<PresetId>) -> String {
    match preset {
        Some(preset) => format!("tokk/device/{}/preset/{}", device, preset),
        None => format!("tokk/device/{}/preset", device),
    }
}

fn check_message(message: &str) -> Result<()> {
    if message.trim().is_empty() {
        return Err(Error::InvalidArgument("preset message is empty".into()));
    }
    Ok(())
}

impl TextPresetApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// List the text presets of a device.
    pub async fn list(&self, device: impl Into<DeviceId>) -> Result<Value> {
        let path = preset_path(device.into(), None);
        self.client.call(Method::GET, &path).send().await
    }

    /// Add a text preset to a device.
    pub async fn add(&self, device: impl Into<DeviceId>, message: &str) -> Result<Value> {
        check_message(message)?;

        let device = device.into();
        let body = PresetPayload {
            device_id: device,
            preset_id: None,
            message,
        };
        self.client
            .call(Method::POST, &preset_path(device, None))
            .json(&body)
            .send()
            .await
    }

    /// Change the text of an existing preset.
    pub async fn update(
        &self,
        device: impl Into<DeviceId>,
        preset: impl Into<PresetId>,
        message: &str,
    ) -> Result<Value> {
        check_message(message)?;

        let (device, preset) = (device.into(), preset.into());
        let body = PresetPayload {
            device_id: device,
            preset_id: Some(preset),
            message,
        };
        self.client
            .call(Method::PUT, &preset_path(device, Some(preset)))
            .json(&body)
            .send()
            .await
    }

    /// Delete a preset.
    pub async fn delete(&self, device: impl Into<DeviceId>, preset: impl Into<PresetId>) -> Result<Value> {
        let path = preset_path(device.into(), Some(preset.into()));
        self.client.call(Method::DELETE, &path).send().await
    }
}
