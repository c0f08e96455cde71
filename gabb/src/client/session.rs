//! Base URL resolution and authenticated request execution.

use log::debug;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use serde_json::Value;
use url::Url;

use super::auth::Authenticator;
use super::http::versioned_base;
use crate::error::{Error, Result};

/// Which configured base URL a request path is resolved against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BaseUrl {
    /// The versioned API root, used by nearly every endpoint.
    #[default]
    Primary,
    /// The bare API root, used by the safezone service.
    Alternate,
}

/// The two base URLs of the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    pub primary: Url,
    pub alternate: Url,
}

impl BaseUrls {
    /// Parse both base URLs.
    pub fn new(primary: &str, alternate: &str) -> Result<Self> {
        Ok(Self {
            primary: Url::parse(primary)?,
            alternate: Url::parse(alternate)?,
        })
    }

    /// Use `root` as the alternate base and `root` + `v2/` as the primary.
    pub fn from_root(root: &str) -> Result<Self> {
        Ok(Self {
            primary: versioned_base(root)?,
            alternate: Url::parse(root)?,
        })
    }

    /// Get the URL for `base`.
    pub fn get(&self, base: BaseUrl) -> &Url {
        match base {
            BaseUrl::Primary => &self.primary,
            BaseUrl::Alternate => &self.alternate,
        }
    }
}

/// Authenticated HTTP session against the Gabb API.
pub struct Session {
    http: Client,
    auth: Authenticator,
    bases: BaseUrls,
    alternate_next: bool,
}

impl Session {
    /// Create a session from a logged-in authenticator.
    ///
    /// `http` should be the client the authenticator was built with.
    pub fn new(http: Client, auth: Authenticator, bases: BaseUrls) -> Self {
        Self {
            http,
            auth,
            bases,
            alternate_next: false,
        }
    }

    /// Resolve the next [`request`](Self::request) against the alternate
    /// base. Only that one request is affected, whatever its outcome.
    pub fn use_alternate_base_once(&mut self) {
        self.alternate_next = true;
    }

    /// Check if the next request will use the alternate base.
    pub fn alternate_pending(&self) -> bool {
        self.alternate_next
    }

    /// Start a request on the currently selected base URL.
    ///
    /// Consumes a pending [`use_alternate_base_once`](Self::use_alternate_base_once).
    pub fn request(&mut self, method: Method, path: &str) -> ApiRequest<'_> {
        let base = if std::mem::take(&mut self.alternate_next) {
            BaseUrl::Alternate
        } else {
            BaseUrl::Primary
        };
        self.request_on(base, method, path)
    }

    /// Start a request on an explicitly chosen base URL.
    pub fn request_on(&self, base: BaseUrl, method: Method, path: &str) -> ApiRequest<'_> {
        ApiRequest {
            session: self,
            method,
            url: self.resolve(base, path),
            query: Vec::new(),
            body: None,
        }
    }

    /// Resolve `path` against `base` using RFC 3986 reference resolution.
    pub fn resolve(&self, base: BaseUrl, path: &str) -> Result<Url> {
        Ok(self.bases.get(base).join(path)?)
    }

    /// The configured base URLs.
    pub fn base_urls(&self) -> &BaseUrls {
        &self.bases
    }

    /// The authenticator decorating this session's requests.
    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("bases", &self.bases)
            .field("alternate_next", &self.alternate_next)
            .field("auth", &self.auth)
            .finish()
    }
}

/// A pending API request with its URL already resolved.
pub struct ApiRequest<'a> {
    session: &'a Session,
    method: Method,
    url: Result<Url>,
    query: Vec<(String, String)>,
    body: Option<Result<Vec<u8>>>,
}

impl ApiRequest<'_> {
    /// Append a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    /// Send `body` as the JSON request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(serde_json::to_vec(body).map_err(Error::Json));
        self
    }

    /// Authenticate and send the request, returning the response payload.
    ///
    /// A top-level `data` member is unwrapped; an empty body yields `Null`.
    pub async fn send(self) -> Result<Value> {
        let mut url = self.url?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }

        let mut builder = self.session.http.request(self.method, url);
        if let Some(body) = self.body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body?);
        }

        let request = self.session.auth.decorate(builder.build()?).await?;
        debug!("{} {}", request.method(), request.url());

        let response = self.session.http.execute(request).await?;
        handle_response(response).await
    }
}

async fn handle_response(response: Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned))
            .or_else(|| status.canonical_reason().map(str::to_owned))
            .unwrap_or_default();
        return Err(Error::api(status.as_u16(), message));
    }

    parse_json_response(&text)
}

/// Parse a JSON response body, unwrapping the `data` envelope when present.
fn parse_json_response(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    let mut value: Value = serde_json::from_str(text)?;
    if let Some(data) = value.get_mut("data") {
        Ok(data.take())
    } else {
        Ok(value)
    }
}
