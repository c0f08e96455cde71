//! HTTP client, authentication and session.

mod auth;
mod http;
mod session;

pub use auth::{AuthEndpoints, Authenticator, Credentials, TokenState};
pub use http::{
    HttpConfig, DEFAULT_APP_BUILD, DEFAULT_AUTH_URL, DEFAULT_BASE_URL, DEFAULT_REFRESH_URL,
    DEFAULT_TIMEOUT,
};
pub use session::{ApiRequest, BaseUrl, BaseUrls, Session};

use crate::api::{
    ContactApi, DeviceApi, EventLogApi, LockModeApi, MapApi, SafezoneApi, TextPresetApi, TodoApi,
    UserApi,
};
use crate::error::{Error, Result};
use http::build_client;
use reqwest::Method;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Builder for creating GabbClient.
pub struct GabbClientBuilder {
    credentials: Option<Credentials>,
    base_url: String,
    auth_url: Option<String>,
    refresh_url: Option<String>,
    app_build: String,
    http_config: HttpConfig,
    relogin_on_refresh_failure: bool,
}

impl std::fmt::Debug for GabbClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GabbClientBuilder")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .field("auth_url", &self.auth_url)
            .field("refresh_url", &self.refresh_url)
            .field("app_build", &self.app_build)
            .field("http_config", &self.http_config)
            .field("relogin_on_refresh_failure", &self.relogin_on_refresh_failure)
            .finish()
    }
}

impl Default for GabbClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GabbClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            credentials: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            auth_url: None,
            refresh_url: None,
            app_build: DEFAULT_APP_BUILD.to_owned(),
            http_config: HttpConfig::default(),
            relogin_on_refresh_failure: false,
        }
    }

    /// Set the parent account credentials.
    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Set the API root. The versioned base is derived from it.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the login endpoint. Defaults to `sso/gabb` under the versioned base.
    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = Some(url.into());
        self
    }

    /// Set the refresh endpoint. Defaults to `token/refresh` under the versioned base.
    pub fn refresh_url(mut self, url: impl Into<String>) -> Self {
        self.refresh_url = Some(url.into());
        self
    }

    /// Set the app build string sent on login.
    pub fn app_build(mut self, build: impl Into<String>) -> Self {
        self.app_build = build.into();
        self
    }

    /// Set the `X-Accept-Language` header.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.http_config.language = language.into();
        self
    }

    /// Set the UTC offset in hours sent as `X-Accept-Offset`.
    pub fn utc_offset(mut self, hours: f64) -> Self {
        self.http_config.utc_offset = hours;
        self
    }

    /// Set custom user agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.http_config.user_agent = ua.into();
        self
    }

    /// Set the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = timeout;
        self
    }

    /// Set connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.http_config.connect_timeout = timeout;
        self
    }

    /// Log in again with the stored credentials when a refresh is rejected.
    pub fn relogin_on_refresh_failure(mut self, enabled: bool) -> Self {
        self.relogin_on_refresh_failure = enabled;
        self
    }

    /// Log in and return a bare session.
    pub async fn build_session(self) -> Result<Session> {
        let credentials = self
            .credentials
            .ok_or_else(|| Error::InvalidArgument("credentials are required".into()))?;

        let bases = BaseUrls::from_root(&self.base_url)?;
        let endpoints = AuthEndpoints {
            auth_url: endpoint(self.auth_url.as_deref(), &bases.primary, "sso/gabb")?,
            refresh_url: endpoint(self.refresh_url.as_deref(), &bases.primary, "token/refresh")?,
            app_build: self.app_build,
        };

        let http = build_client(&self.http_config)?;
        let auth = Authenticator::login(http.clone(), credentials, endpoints)
            .await?
            .relogin_on_refresh_failure(self.relogin_on_refresh_failure);

        Ok(Session::new(http, auth, bases))
    }

    /// Log in and build GabbClient.
    pub async fn connect(self) -> Result<GabbClient> {
        let session = self.build_session().await?;

        Ok(GabbClient {
            inner: Arc::new(GabbClientInner { session }),
        })
    }
}

fn endpoint(explicit: Option<&str>, primary: &Url, default_path: &str) -> Result<Url> {
    match explicit {
        Some(url) => Ok(Url::parse(url)?),
        None => Ok(primary.join(default_path)?),
    }
}

/// Internal client state.
pub(crate) struct GabbClientInner {
    pub session: Session,
}

impl GabbClientInner {
    /// Start a request against the versioned API.
    pub fn call(&self, method: Method, path: &str) -> ApiRequest<'_> {
        self.session.request_on(BaseUrl::Primary, method, path)
    }

    /// Start a request against the bare API root.
    pub fn call_root(&self, method: Method, path: &str) -> ApiRequest<'_> {
        self.session.request_on(BaseUrl::Alternate, method, path)
    }
}

/// Gabb client for the parent account API.
#[derive(Clone)]
pub struct GabbClient {
    pub(crate) inner: Arc<GabbClientInner>,
}

impl GabbClient {
    /// Create a new client builder.
    pub fn builder() -> GabbClientBuilder {
        GabbClientBuilder::new()
    }

    /// Get the contact API.
    pub fn contacts(&self) -> ContactApi {
        ContactApi::new(self.inner.clone())
    }

    /// Get the device API.
    pub fn devices(&self) -> DeviceApi {
        DeviceApi::new(self.inner.clone())
    }

    /// Get the map API.
    pub fn map(&self) -> MapApi {
        MapApi::new(self.inner.clone())
    }

    /// Get the event log API.
    pub fn event_logs(&self) -> EventLogApi {
        EventLogApi::new(self.inner.clone())
    }

    /// Get the user API.
    pub fn user(&self) -> UserApi {
        UserApi::new(self.inner.clone())
    }

    /// Get the lock mode schedule API.
    pub fn lock_modes(&self) -> LockModeApi {
        LockModeApi::new(self.inner.clone())
    }

    /// Get the todo API.
    pub fn todos(&self) -> TodoApi {
        TodoApi::new(self.inner.clone())
    }

    /// Get the text preset API.
    pub fn text_presets(&self) -> TextPresetApi {
        TextPresetApi::new(self.inner.clone())
    }

    /// Get the safezone API.
    pub fn safezones(&self) -> SafezoneApi {
        SafezoneApi::new(self.inner.clone())
    }

    /// The underlying session, for endpoints without a typed wrapper.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// The account this client is logged in as.
    pub fn username(&self) -> &str {
        self.inner.session.authenticator().username()
    }
}

impl std::fmt::Debug for GabbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GabbClient")
            .field("username", &self.username())
            .field("base_urls", self.inner.session.base_urls())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_debug_shows_settings() {
        let builder = GabbClient::builder()
            .credentials("parent@example.com", "hunter2")
            .relogin_on_refresh_failure(true);
        let printed = format!("{:?}", builder);

        assert!(printed.contains("relogin_on_refresh_failure: true"));
        assert!(printed.contains("parent@example.com"));
        assert!(!printed.contains("hunter2"));
    }
}
