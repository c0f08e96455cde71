//! Event log API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{client::GabbClientInner, error::Result};

/// API for the account event log.
pub struct EventLogApi {
    client: Arc<GabbClientInner>,
}

impl EventLogApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// List the entries in the event log.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(Method::GET, "eventlogs").send().await
    }

    /// Delete every event in the log.
    pub async fn clear(&self) -> Result<Value> {
        self.client.call(Method::DELETE, "eventlogs").send().await
    }

    /// Count the events currently in the log.
    pub async fn count(&self) -> Result<Value> {
        self.client.call(Method::GET, "eventlogs/count").send().await
    }
}
