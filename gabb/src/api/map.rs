//! Map API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{client::GabbClientInner, error::Result, models::DeviceId};

/// API for device locations.
pub struct MapApi {
    client: Arc<GabbClientInner>,
}

impl MapApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// Get the last known location and general info of every device.
    ///
    /// This is also the easiest place to look up device IDs.
    pub async fn get(&self) -> Result<Value> {
        self.client.call(Method::GET, "map").send().await
    }

    /// Ask a device to report its location now.
    pub async fn refresh(&self, device: impl Into<DeviceId>) -> Result<Value> {
        let path = format!("map/refresh/{}", device.into());
        self.client.call(Method::POST, &path).send().await
    }
}
