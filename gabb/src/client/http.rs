//! HTTP client configuration.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Default API root. Safezone endpoints live directly under it.
pub const DEFAULT_BASE_URL: &str = "https://api.myfilip.com/";

/// Version segment joined onto the API root for nearly every endpoint.
pub const API_VERSION_PATH: &str = "v2/";

/// Default login endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://api.myfilip.com/v2/sso/gabb";

/// Default token refresh endpoint.
pub const DEFAULT_REFRESH_URL: &str = "https://api.myfilip.com/v2/token/refresh";

/// Build string of the Gabb app being emulated. The API rejects logins
/// without one, so only change it with a reason.
pub const DEFAULT_APP_BUILD: &str = "1.28 (966)";

/// Client identification sent as User-Agent.
pub const DEFAULT_USER_AGENT: &str = "FiLIP-iOS";

/// Timeout applied to every call, login and refresh included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Value of `X-Accept-Language`.
    pub language: String,
    /// Value of `X-Accept-Offset`, the client's UTC offset in hours.
    pub utc_offset: f64,
    /// Client identification.
    pub user_agent: String,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Total per-request timeout.
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            language: "en-US".to_owned(),
            utc_offset: -5.0,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            connect_timeout: Duration::from_secs(5),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpConfig {
    /// Headers the API requires on every call.
    pub fn required_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-accept-language"),
            HeaderValue::from_str(&self.language)?,
        );
        headers.insert(
            HeaderName::from_static("x-accept-offset"),
            HeaderValue::from_str(&format!("{:.6}", self.utc_offset))?,
        );
        headers.insert(
            HeaderName::from_static("accept-version"),
            HeaderValue::from_static("1.0"),
        );
        headers.insert(
            HeaderName::from_static("x-accept-version"),
            HeaderValue::from_static("1.0"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }
}

/// Build a reqwest client with the given configuration.
pub fn build_client(config: &HttpConfig) -> Result<Client> {
    Client::builder()
        .default_headers(config.required_headers()?)
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .gzip(true)
        .build()
        .map_err(Error::Network)
}

/// Derive the versioned primary base from the API root.
pub fn versioned_base(root: &str) -> Result<Url> {
    Ok(Url::parse(root)?.join(API_VERSION_PATH)?)
}
