//! Safezone API.
//!
//! The safezone service sits at the bare API root rather than under the
//! versioned path, and its responses use PascalCase keys.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{
    client::GabbClientInner,
    error::Result,
    models::{Safezone, ZoneId},
};

/// API for safezones (geofences).
pub struct SafezoneApi {
    client: Arc<GabbClientInner>,
}

impl SafezoneApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// List the account's safezones.
    pub async fn list(&self) -> Result<Value> {
        self.client.call_root(Method::GET, "safezone/list").send().await
    }

    /// Add a safezone.
    pub async fn add(&self, zone: &Safezone) -> Result<Value> {
        zone.validate()?;
        self.client
            .call_root(Method::POST, "safezone/add")
            .json(zone)
            .send()
            .await
    }

    /// Replace an existing safezone.
    pub async fn update(&self, id: impl Into<ZoneId>, zone: &Safezone) -> Result<Value> {
        zone.validate()?;
        let id: ZoneId = id.into();
        self.client
            .call_root(Method::POST, "safezone/edit")
            .query("zoneId", id)
            .json(zone)
            .send()
            .await
    }

    /// Delete a safezone.
    pub async fn delete(&self, id: impl Into<ZoneId>) -> Result<Value> {
        let id: ZoneId = id.into();
        self.client
            .call_root(Method::POST, "safezone/delete")
            .query("zoneId", id)
            .send()
            .await
    }
}
