//! Shared helpers for tests against a mock API.

use chrono::{Duration, Utc};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::GabbClient;

/// Mount a login endpoint handing out a token valid for an hour.
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v2/sso/gabb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "accessToken": "test-access",
                "refreshToken": "test-refresh",
                "expDate": (Utc::now() + Duration::hours(1)).to_rfc3339(),
            }
        })))
        .mount(server)
        .await;
}

/// Connect a client to `server`, with the API root at the server root.
pub async fn connect(server: &MockServer) -> GabbClient {
    mount_login(server).await;

    GabbClient::builder()
        .credentials("parent@example.com", "hunter2")
        .base_url(format!("{}/", server.uri()))
        .connect()
        .await
        .unwrap()
}
