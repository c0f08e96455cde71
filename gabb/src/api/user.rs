//! User API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::Value;

use crate::{client::GabbClientInner, error::Result};

/// API for the parent account itself.
pub struct UserApi {
    client: Arc<GabbClientInner>,
}

impl UserApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// Get the parent's profile.
    pub async fn profile(&self) -> Result<Value> {
        self.client.call(Method::GET, "user/profile").send().await
    }
}
