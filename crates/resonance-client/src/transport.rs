//! Deadline-bounded HTTP transport
//!
//! A [`Transport`] issues exactly one outbound call and hands back the raw
//! status, headers and body. Non-2xx statuses are not failures here: error
//! bodies carry structured codes that [`crate::api_error::map_error`] needs
//! to inspect. The only failures are network errors and deadline expiry.

use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// HTTP method used by the Resonance API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET request (reads)
    Get,
    /// POST request (creations, auth flows)
    Post,
    /// DELETE request
    Delete,
}

impl HttpMethod {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully built outbound call
#[derive(Debug, Clone)]
pub struct RawRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute URL including the query string
    pub url: Url,
    /// Headers to send
    pub headers: HashMap<String, String>,
    /// Request body; `None` sends no body at all
    pub body: Option<Vec<u8>>,
    /// Deadline for the whole call, body included
    pub timeout: Duration,
}

/// Raw outcome of a call that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status (e.g. "Not Found")
    pub status_text: String,
    /// Response headers, names lowercased
    pub headers: HashMap<String, String>,
    /// Response body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a response with the canonical reason phrase for `status`
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self { status, status_text, headers: HashMap::new(), body }
    }

    /// Check if the response is successful (2xx status)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value by lowercase name
    pub fn header(&self, key: &str) -> Option<&String> {
        self.headers.get(key)
    }
}

/// Issues a single outbound call
///
/// Implementations must honour [`RawRequest::timeout`] and report expiry as
/// [`Error::Timeout`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute one call and return the raw response
    async fn execute(&self, request: RawRequest) -> Result<RawResponse>;
}

/// Default [`Transport`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: ReqwestClient,
}

impl ReqwestTransport {
    /// Create a transport sending the given user agent
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = ReqwestClient::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest` client
    pub fn from_client(client: ReqwestClient) -> Self {
        Self { client }
    }

    async fn send(&self, request: RawRequest) -> Result<RawResponse> {
        let mut req = self.client.request(request.method.into(), request.url);

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        let response = req.send().await?;
        let status = response.status();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(key.to_string(), value_str.to_string());
            }
        }

        let body = response.bytes().await?.to_vec();

        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: RawRequest) -> Result<RawResponse> {
        let timeout = request.timeout;

        // Dropping the send future on expiry cancels the in-flight call and its timer.
        match tokio::time::timeout(timeout, self.send(request)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout { timeout }),
        }
    }
}
