//! Todo API.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::{
    client::GabbClientInner,
    error::{Error, Result},
    models::{DeviceId, TodoId},
};

/// API for device todos.
pub struct TodoApi {
    client: Arc<GabbClientInner>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TodoRef {
    device_id: DeviceId,
    todo_id: TodoId,
}

impl TodoApi {
    pub(crate) fn new(client: Arc<GabbClientInner>) -> Self {
        Self { client }
    }

    /// List todos.
    pub async fn list(&self) -> Result<Value> {
        self.client.call(Method::GET, "todo").send().await
    }

    /// Delete a todo from a device.
    pub async fn delete(&self, device: impl Into<DeviceId>, todo: impl Into<TodoId>) -> Result<Value> {
        let body = TodoRef {
            device_id: device.into(),
            todo_id: todo.into(),
        };
        self.client
            .call(Method::DELETE, "todo")
            .json(&body)
            .send()
            .await
    }

    /// Add a todo.
    ///
    /// The payload the API expects for new todos is not known yet.
    pub async fn add(&self) -> Result<Value> {
        Err(Error::NotImplemented("adding todos".into()))
    }

    /// Update a todo.
    ///
    /// The payload the API expects for todo updates is not known yet.
    pub async fn update(&self) -> Result<Value> {
        Err(Error::NotImplemented("updating todos".into()))
    }
}
