//! Contact API.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{
    client::GabbClientInner,
    error::Result,
    models::{ContactId, DeviceId, NewContact},
};

/// API for account contacts.
pub struct ContactApi {
    client: Arc<GabbClientInner>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmergencyContactUpdate {
    contact_id: ContactId,
    is_template: bool,
}

impl ContactApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// List the account's contacts.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(Method::GET, "contact").send().await
    }

    /// Add a contact to the account.
    pub async fn add(&self, contact: &NewContact) -> Result<Value> {
        self.client
            .call(Method::POST, "contact")
            .json(contact)
            .send()
            .await
    }

    /// Delete a contact.
    pub async fn delete(&self, contact: impl Into<ContactId>) -> Result<Value> {
        let path = format!("contact/{}", contact.into());
        self.client.call(Method::DELETE, &path).send().await
    }

    /// Get the emergency contact of every device on the account.
    pub async fn emergency(&self) -> Result<Value> {
        self.client.call(Method::GET, "contact/emergency").send().await
    }

    /// Make `contact` the emergency contact of `device`.
    pub async fn set_emergency(
        &self,
        device: impl Into<DeviceId>,
        contact: impl Into<ContactId>,
    ) -> Result<Value> {
        let path = format!("contact/emergency/{}", device.into());
        let body = EmergencyContactUpdate {
            contact_id: contact.into(),
            is_template: false,
        };

        self.client.call(Method::PUT, &path).json(&body).send().await
    }
}
