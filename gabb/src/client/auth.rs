//! Token authentication for the Gabb API.
//!
//! The API issues a short-lived access token plus a refresh token in
//! exchange for the parent account's username and password. Every outgoing
//! API request passes through [`Authenticator::decorate`], which renews the
//! access token when it has expired and attaches it as a bearer header.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use log::{debug, warn};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Client, Request, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use url::Url;

use super::http::{DEFAULT_APP_BUILD, DEFAULT_AUTH_URL, DEFAULT_REFRESH_URL};
use crate::error::{Error, Result};

/// Parent/guardian account credentials.
#[derive(Clone)]
pub struct Credentials {
    /// Account username (usually an email address).
    pub username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check if both fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Where and as what the authenticator logs in.
#[derive(Debug, Clone)]
pub struct AuthEndpoints {
    /// Login endpoint, takes username and password.
    pub auth_url: Url,
    /// Refresh endpoint, takes the refresh token.
    pub refresh_url: Url,
    /// Build string of the app being emulated.
    pub app_build: String,
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self {
            auth_url: Url::parse(DEFAULT_AUTH_URL).expect("default auth URL is valid"),
            refresh_url: Url::parse(DEFAULT_REFRESH_URL).expect("default refresh URL is valid"),
            app_build: DEFAULT_APP_BUILD.to_owned(),
        }
    }
}

/// Current token pair and its expiry.
///
/// Always replaced as a whole from a single server response.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenState {
    /// Bearer token for API calls.
    pub access_token: String,
    /// Token used to obtain the next access token.
    pub refresh_token: String,
    /// When the access token stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl TokenState {
    /// Whether the access token had expired at `now`.
    ///
    /// A token expiring exactly at `now` is still valid.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }

    /// Whether the access token has expired.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

impl fmt::Debug for TokenState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenState")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    app_build: &'a str,
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Deserialize)]
struct TokenEnvelope {
    data: Option<TokenPayload>,
    message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenPayload {
    access_token: Option<String>,
    refresh_token: Option<String>,
    exp_date: Option<String>,
}

/// Keeps a valid bearer token and injects it into outgoing requests.
pub struct Authenticator {
    http: Client,
    credentials: Credentials,
    endpoints: AuthEndpoints,
    relogin_on_refresh_failure: bool,
    // Held across the expiry check and the refresh so concurrent callers
    // wait for one renewal instead of starting their own.
    tokens: Mutex<TokenState>,
}

impl Authenticator {
    /// Log in with the given credentials and return a ready authenticator.
    ///
    /// The client should carry the API's required headers as defaults.
    pub async fn login(
        http: Client,
        credentials: Credentials,
        endpoints: AuthEndpoints,
    ) -> Result<Self> {
        if !credentials.is_complete() {
            return Err(Error::InvalidArgument(
                "username and password are required".into(),
            ));
        }

        let tokens = request_login(&http, &credentials, &endpoints).await?;

        Ok(Self {
            http,
            credentials,
            endpoints,
            relogin_on_refresh_failure: false,
            tokens: Mutex::new(tokens),
        })
    }

    /// Fall back to a full login when the refresh endpoint rejects the
    /// refresh token. Off by default.
    pub fn relogin_on_refresh_failure(mut self, enabled: bool) -> Self {
        self.relogin_on_refresh_failure = enabled;
        self
    }

    /// Exchange the stored refresh token for a new token pair.
    pub async fn refresh(&self) -> Result<()> {
        let mut tokens = self.tokens.lock().await;
        let renewed = self.renew(&tokens).await?;
        *tokens = renewed;
        Ok(())
    }

    /// Discard the current tokens and log in again with the stored credentials.
    pub async fn reauthenticate(&self) -> Result<()> {
        let mut tokens = self.tokens.lock().await;
        *tokens = request_login(&self.http, &self.credentials, &self.endpoints).await?;
        Ok(())
    }

    /// Attach a current bearer token to `request`, refreshing first if the
    /// stored one has expired.
    pub async fn decorate(&self, mut request: Request) -> Result<Request> {
        let mut tokens = self.tokens.lock().await;
        if tokens.is_expired() {
            debug!("access token expired at {}, refreshing", tokens.expires_at);
            let renewed = self.renew(&tokens).await?;
            *tokens = renewed;
        }

        let mut value = HeaderValue::from_str(&format!("Bearer {}", tokens.access_token))?;
        drop(tokens);

        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(request)
    }

    /// Current access token.
    pub async fn access_token(&self) -> String {
        self.tokens.lock().await.access_token.clone()
    }

    /// Expiry of the current access token.
    pub async fn expires_at(&self) -> DateTime<Utc> {
        self.tokens.lock().await.expires_at
    }

    /// The account this authenticator logs in as.
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    async fn renew(&self, current: &TokenState) -> Result<TokenState> {
        let (status, body) = send_refresh(&self.http, &self.endpoints, &current.refresh_token).await?;

        // Only an explicit rejection falls back to a full login. A 2xx with
        // an unusable body is reported as is.
        if !status.is_success() && self.relogin_on_refresh_failure {
            warn!("token refresh rejected with status {}, logging in again", status.as_u16());
            return request_login(&self.http, &self.credentials, &self.endpoints).await;
        }

        parse_token_response(status, &body, "token refresh")
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authenticator")
            .field("username", &self.credentials.username)
            .field("endpoints", &self.endpoints)
            .field("relogin_on_refresh_failure", &self.relogin_on_refresh_failure)
            .finish()
    }
}

async fn request_login(
    http: &Client,
    credentials: &Credentials,
    endpoints: &AuthEndpoints,
) -> Result<TokenState> {
    debug!("logging in as {} at {}", credentials.username, endpoints.auth_url);

    let body = LoginRequest {
        app_build: &endpoints.app_build,
        username: &credentials.username,
        password: &credentials.password,
    };
    let (status, text) = post_json(http, endpoints.auth_url.clone(), &body).await?;

    parse_token_response(status, &text, "login")
}

async fn send_refresh(
    http: &Client,
    endpoints: &AuthEndpoints,
    refresh_token: &str,
) -> Result<(StatusCode, String)> {
    debug!("refreshing access token at {}", endpoints.refresh_url);

    let body = RefreshRequest { refresh_token };
    post_json(http, endpoints.refresh_url.clone(), &body).await
}

async fn post_json<B: Serialize>(http: &Client, url: Url, body: &B) -> Result<(StatusCode, String)> {
    let response = http.post(url).json(body).send().await?;
    let status = response.status();
    let text = response.text().await?;

    Ok((status, text))
}

/// Turn a login/refresh response into a complete token state.
fn parse_token_response(status: StatusCode, body: &str, action: &str) -> Result<TokenState> {
    let envelope: Option<TokenEnvelope> = serde_json::from_str(body).ok();

    if !status.is_success() {
        let message = envelope
            .and_then(|e| e.message)
            .or_else(|| status.canonical_reason().map(str::to_owned))
            .unwrap_or_default();
        return Err(Error::auth(format!(
            "{} rejected with status {}: {}",
            action,
            status.as_u16(),
            message
        )));
    }

    let payload = envelope
        .ok_or_else(|| Error::auth(format!("{} response is not valid JSON", action)))?
        .data
        .ok_or_else(|| Error::auth(format!("{} response has no data object", action)))?;

    let field = |value: Option<String>, name: &str| {
        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::auth(format!("{} response is missing {}", action, name)))
    };

    let access_token = field(payload.access_token, "accessToken")?;
    let refresh_token = field(payload.refresh_token, "refreshToken")?;
    let exp_date = field(payload.exp_date, "expDate")?;
    let expires_at = parse_expiry(&exp_date)?;

    Ok(TokenState {
        access_token,
        refresh_token,
        expires_at,
    })
}

/// Parse `expDate`. Timestamps without an offset are taken as UTC.
fn parse_expiry(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::auth(format!("unparsable expDate {:?}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::http::{build_client, HttpConfig};

    fn token_body(access: &str, refresh: &str, exp: DateTime<Utc>) -> serde_json::Value {
        json!({
            "data": {
                "accessToken": access,
                "refreshToken": refresh,
                "expDate": exp.to_rfc3339(),
            }
        })
    }

    fn endpoints(server: &MockServer) -> AuthEndpoints {
        AuthEndpoints {
            auth_url: Url::parse(&format!("{}/v2/sso/gabb", server.uri())).unwrap(),
            refresh_url: Url::parse(&format!("{}/v2/token/refresh", server.uri())).unwrap(),
            app_build: "1.28 (966)".to_owned(),
        }
    }

    fn http() -> Client {
        build_client(&HttpConfig::default()).unwrap()
    }

    fn outgoing() -> Request {
        Client::new()
            .get("https://api.myfilip.com/v2/contact")
            .build()
            .unwrap()
    }

    async fn mount_login(server: &MockServer, body: serde_json::Value, calls: u64) {
        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(calls)
            .mount(server)
            .await;
    }

    async fn login(server: &MockServer) -> Authenticator {
        Authenticator::login(http(), Credentials::new("parent@example.com", "hunter2"), endpoints(server))
            .await
            .unwrap()
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let mut tokens = TokenState {
            access_token: "a".into(),
            refresh_token: "r".into(),
            expires_at: now,
        };
        assert!(!tokens.is_expired_at(now));

        tokens.expires_at = now - Duration::seconds(1);
        assert!(tokens.is_expired_at(now));

        tokens.expires_at = now + Duration::seconds(1);
        assert!(!tokens.is_expired_at(now));
    }

    #[test]
    fn test_parse_expiry_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(parse_expiry("2024-05-01T12:00:00Z").unwrap(), expected);
        assert_eq!(parse_expiry("2024-05-01T14:00:00+02:00").unwrap(), expected);
        assert_eq!(parse_expiry("2024-05-01T12:00:00.000").unwrap(), expected);
        assert_eq!(parse_expiry("2024-05-01T12:00:00").unwrap(), expected);
        assert!(parse_expiry("next tuesday").is_err());
    }

    #[test]
    fn test_parse_token_response_missing_field() {
        let body = json!({"data": {"refreshToken": "r", "expDate": "2024-05-01T12:00:00Z"}});
        let err = parse_token_response(StatusCode::OK, &body.to_string(), "login").unwrap_err();
        assert!(matches!(err, Error::Authentication(ref m) if m.contains("accessToken")));
    }

    #[test]
    fn test_parse_token_response_rejected() {
        let body = json!({"message": "Invalid credentials"});
        let err =
            parse_token_response(StatusCode::UNAUTHORIZED, &body.to_string(), "login").unwrap_err();
        assert!(matches!(err, Error::Authentication(ref m) if m.contains("Invalid credentials")));

        let err = parse_token_response(StatusCode::BAD_GATEWAY, "<html>", "login").unwrap_err();
        assert!(matches!(err, Error::Authentication(ref m) if m.contains("502")));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let creds = Credentials::new("parent@example.com", "hunter2");
        let printed = format!("{:?}", creds);
        assert!(printed.contains("parent@example.com"));
        assert!(!printed.contains("hunter2"));
    }

    #[tokio::test]
    async fn test_login_sends_credentials_and_headers() {
        let server = MockServer::start().await;
        let exp = Utc::now() + Duration::hours(1);

        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .and(header("x-accept-version", "1.0"))
            .and(header("accept-version", "1.0"))
            .and(header("user-agent", "FiLIP-iOS"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "appBuild": "1.28 (966)",
                "username": "parent@example.com",
                "password": "hunter2",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1", exp)))
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        assert_eq!(auth.access_token().await, "access-1");
        assert_eq!(auth.expires_at().await.timestamp(), exp.timestamp());
    }

    #[tokio::test]
    async fn test_login_rejects_incomplete_credentials() {
        let server = MockServer::start().await;
        let result =
            Authenticator::login(http(), Credentials::new("parent@example.com", ""), endpoints(&server)).await;
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn test_login_malformed_response() {
        let server = MockServer::start().await;
        mount_login(
            &server,
            json!({"data": {"refreshToken": "r", "expDate": "2030-01-01T00:00:00Z"}}),
            1,
        )
        .await;

        let result =
            Authenticator::login(http(), Credentials::new("parent@example.com", "hunter2"), endpoints(&server)).await;
        assert!(matches!(result, Err(Error::Authentication(_))));
    }

    #[tokio::test]
    async fn test_login_unreachable_is_network_error() {
        let endpoints = AuthEndpoints {
            auth_url: Url::parse("http://127.0.0.1:9/v2/sso/gabb").unwrap(),
            ..Default::default()
        };
        let result =
            Authenticator::login(http(), Credentials::new("parent@example.com", "hunter2"), endpoints).await;
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn test_decorate_valid_token_skips_refresh() {
        let server = MockServer::start().await;
        mount_login(&server, token_body("access-1", "refresh-1", Utc::now() + Duration::hours(1)), 1).await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        let request = auth.decorate(outgoing()).await.unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer access-1");
    }

    #[tokio::test]
    async fn test_decorate_expired_token_refreshes_once() {
        let server = MockServer::start().await;
        mount_login(&server, token_body("access-1", "refresh-1", Utc::now() - Duration::minutes(1)), 1).await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .and(body_json(json!({"refreshToken": "refresh-1"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(token_body("access-2", "refresh-2", Utc::now() + Duration::hours(1))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        let request = auth.decorate(outgoing()).await.unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer access-2");

        // The renewed token is still valid, so no further refresh.
        let request = auth.decorate(outgoing()).await.unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer access-2");
    }

    #[tokio::test]
    async fn test_sequential_expired_requests_each_refresh() {
        let server = MockServer::start().await;
        let past = Utc::now() - Duration::minutes(1);
        mount_login(&server, token_body("access-1", "refresh-1", past), 1).await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-2", "refresh-2", past)))
            .expect(2)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        auth.decorate(outgoing()).await.unwrap();
        auth.decorate(outgoing()).await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_decorate_shares_one_refresh() {
        let server = MockServer::start().await;
        mount_login(&server, token_body("access-1", "refresh-1", Utc::now() - Duration::minutes(1)), 1).await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(token_body("access-2", "refresh-2", Utc::now() + Duration::hours(1))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let auth = Arc::new(login(&server).await);
        let (a, b, c) = tokio::join!(
            auth.decorate(outgoing()),
            auth.decorate(outgoing()),
            auth.decorate(outgoing()),
        );
        for request in [a, b, c] {
            assert_eq!(request.unwrap().headers()[AUTHORIZATION], "Bearer access-2");
        }
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_previous_tokens() {
        let server = MockServer::start().await;
        let past = Utc::now() - Duration::minutes(1);
        mount_login(&server, token_body("access-1", "refresh-1", past), 1).await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"accessToken": "half"}})))
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        let result = auth.decorate(outgoing()).await;
        assert!(matches!(result, Err(Error::Authentication(_))));
        assert_eq!(auth.access_token().await, "access-1");
        assert_eq!(auth.expires_at().await.timestamp(), past.timestamp());
    }

    #[tokio::test]
    async fn test_rejected_refresh_without_fallback() {
        let server = MockServer::start().await;
        mount_login(&server, token_body("access-1", "refresh-1", Utc::now() - Duration::minutes(1)), 1).await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})))
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        let result = auth.refresh().await;
        assert!(matches!(result, Err(Error::Authentication(ref m)) if m.contains("Token expired")));
    }

    #[tokio::test]
    async fn test_rejected_refresh_falls_back_to_login() {
        let server = MockServer::start().await;
        // Initial login hands out an expired token, the fallback login a fresh one.
        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(token_body("access-1", "refresh-1", Utc::now() - Duration::minutes(1))),
            )
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(token_body("access-3", "refresh-3", Utc::now() + Duration::hours(1))),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await.relogin_on_refresh_failure(true);
        let request = auth.decorate(outgoing()).await.unwrap();
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer access-3");
    }

    #[tokio::test]
    async fn test_malformed_refresh_does_not_fall_back_to_login() {
        let server = MockServer::start().await;
        let past = Utc::now() - Duration::minutes(1);
        mount_login(&server, token_body("access-1", "refresh-1", past), 1).await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"accessToken": "half"}})))
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await.relogin_on_refresh_failure(true);
        let result = auth.decorate(outgoing()).await;
        assert!(matches!(result, Err(Error::Authentication(ref m)) if m.contains("refreshToken")));
        assert_eq!(auth.access_token().await, "access-1");
    }

    #[tokio::test]
    async fn test_unparsable_expiry_is_authentication_error() {
        let server = MockServer::start().await;
        mount_login(
            &server,
            json!({"data": {"accessToken": "a", "refreshToken": "r", "expDate": "next tuesday"}}),
            1,
        )
        .await;

        let result =
            Authenticator::login(http(), Credentials::new("parent@example.com", "hunter2"), endpoints(&server)).await;
        assert!(matches!(result, Err(Error::Authentication(ref m)) if m.contains("expDate")));
    }

    #[tokio::test]
    async fn test_reauthenticate_replaces_tokens() {
        let server = MockServer::start().await;
        let first_exp = Utc::now() + Duration::minutes(5);
        let second_exp = Utc::now() + Duration::hours(2);
        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1", first_exp)))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .and(body_json(json!({
                "appBuild": "1.28 (966)",
                "username": "parent@example.com",
                "password": "hunter2",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-2", "refresh-2", second_exp)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/token/refresh"))
            .and(body_json(json!({"refreshToken": "refresh-2"})))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        auth.reauthenticate().await.unwrap();

        assert_eq!(auth.access_token().await, "access-2");
        assert_eq!(auth.expires_at().await.timestamp(), second_exp.timestamp());
        // The next refresh must present the refresh token from the new login.
        assert!(auth.refresh().await.is_err());
    }

    #[tokio::test]
    async fn test_rejected_reauthenticate_keeps_previous_tokens() {
        let server = MockServer::start().await;
        let exp = Utc::now() + Duration::minutes(5);
        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1", "refresh-1", exp)))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/sso/gabb"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})))
            .expect(1)
            .mount(&server)
            .await;

        let auth = login(&server).await;
        let result = auth.reauthenticate().await;
        assert!(matches!(result, Err(Error::Authentication(ref m)) if m.contains("Invalid credentials")));
        assert_eq!(auth.access_token().await, "access-1");
        assert_eq!(auth.expires_at().await.timestamp(), exp.timestamp());
    }
}
