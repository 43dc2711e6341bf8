//! Request facade
//!
//! [`HttpClient`] is what the resource wrappers call. It joins the base URL
//! and path, serializes query parameters, injects the default headers
//! (bearer credential included), runs the call through a [`Transport`],
//! maps non-2xx responses with [`map_error`] and unwraps the optional
//! `{"data": ...}` envelope.
//!
//! The header map is read when each call starts. A call already in flight
//! keeps the headers it started with; later calls see the latest values.

use crate::api_error::map_error;
use crate::query::QueryParams;
use crate::retry::{retry, RetryConfig};
use crate::transport::{HttpMethod, RawRequest, RawResponse, ReqwestTransport, Transport};
use crate::{Error, Result};
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

const AUTHORIZATION: &str = "Authorization";
const CONTENT_TYPE: &str = "Content-Type";

// =============================================================================
// Client Configuration
// =============================================================================

/// Configuration for [`HttpClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL (e.g., "https://api.resonance.network")
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Custom headers to include in all requests
    pub default_headers: HashMap<String, String>,
    /// Retry policy for GET requests; `None` disables retries
    pub retry: Option<RetryConfig>,
}

impl ClientConfig {
    /// Create a new config with an API URL
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("resonance-sdk/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
            retry: None,
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Add a default header
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Retry GET requests that fail below the HTTP layer
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }
}

// =============================================================================
// HTTP Client
// =============================================================================

/// Client for the Resonance REST API
///
/// # Examples
/// ```no_run
/// use resonance_client::{ClientConfig, HttpClient, QueryParams};
///
/// async fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = HttpClient::new(ClientConfig::new("https://api.resonance.network"))?;
///
///     let params = QueryParams::new().param("limit", 10u32);
///     let leaders: serde_json::Value =
///         client.fetch_json("/eth/v1/leaderboard/validators", Some(&params)).await?;
///
///     println!("{leaders}");
///     Ok(())
/// }
/// ```
pub struct HttpClient {
    base_url: String,
    timeout: Duration,
    retry: Option<RetryConfig>,
    headers: RwLock<HashMap<String, String>>,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("headers", &self.headers.read().keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Create a client using the default `reqwest` transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.user_agent)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let base_url = config.api_url.strip_suffix('/').unwrap_or(&config.api_url).to_string();

        let mut headers = HashMap::new();
        headers.insert(CONTENT_TYPE.to_string(), "application/json".to_string());
        headers.extend(config.default_headers);

        Self {
            base_url,
            timeout: config.timeout,
            retry: config.retry,
            headers: RwLock::new(headers),
            transport,
        }
    }

    /// Get the base URL (trailing slash removed)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Set or clear the bearer credential
    ///
    /// `None` or an empty token removes the `Authorization` header entirely.
    pub fn set_bearer(&self, token: Option<&str>) {
        let mut headers = self.headers.write();
        match token.filter(|token| !token.is_empty()) {
            Some(token) => {
                headers.insert(AUTHORIZATION.to_string(), format!("Bearer {token}"));
            }
            None => {
                headers.remove(AUTHORIZATION);
            }
        }
    }

    /// Insert or overwrite a default header for all subsequent calls
    pub fn set_header(&self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.write().insert(key.into(), value.into());
    }

    /// Get the current value of a default header
    pub fn header(&self, key: &str) -> Option<String> {
        self.headers.read().get(key).cloned()
    }

    /// Build the absolute URL for a path and optional query
    pub fn build_url(&self, path: &str, params: Option<&QueryParams>) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;

        if let Some(params) = params.filter(|params| !params.is_empty()) {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params.iter() {
                pairs.append_pair(key, &value.to_string());
            }
        }

        Ok(url)
    }

    /// GET a resource and decode it
    pub async fn fetch_json<T>(&self, path: &str, params: Option<&QueryParams>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, params)?;

        match &self.retry {
            Some(config) => {
                retry(config, Error::is_transient, || {
                    self.execute(HttpMethod::Get, url.clone(), None)
                })
                .await
            }
            None => self.execute(HttpMethod::Get, url, None).await,
        }
    }

    /// POST a JSON body and decode the response
    ///
    /// With `body: None` the request is sent without any body.
    pub async fn submit_json<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path, None)?;
        let body = body.map(serde_json::to_vec).transpose()?;
        self.execute(HttpMethod::Post, url, body).await
    }

    /// DELETE a resource and decode the response
    pub async fn remove_resource<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.build_url(path, None)?;
        self.execute(HttpMethod::Delete, url, None).await
    }

    async fn execute<T>(&self, method: HttpMethod, url: Url, body: Option<Vec<u8>>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request = RawRequest {
            method,
            url,
            headers: self.headers.read().clone(),
            body,
            timeout: self.timeout,
        };

        tracing::debug!(method = method.as_str(), url = %request.url, "sending request");

        let response = self.transport.execute(request).await.inspect_err(|err| {
            tracing::warn!(method = method.as_str(), error = %err, "request failed");
        })?;

        decode_response(response)
    }
}

/// Map a raw outcome to the caller's type
fn decode_response<T>(response: RawResponse) -> Result<T>
where
    T: DeserializeOwned,
{
    if !response.is_success() {
        let err = map_error(&response);
        tracing::warn!(status = err.status(), code = err.code(), "API error response");
        return Err(Error::Api(err));
    }

    let json: serde_json::Value = serde_json::from_slice(&response.body)?;
    Ok(serde_json::from_value(unwrap_envelope(json))?)
}

/// Return `data` from a `{"data": ...}` envelope, or the body unchanged
pub fn unwrap_envelope(json: serde_json::Value) -> serde_json::Value {
    match json {
        serde_json::Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(serde_json::Value::Null)
        }
        other => other,
    }
}

// =============================================================================
// Tests
// =============================================================================
