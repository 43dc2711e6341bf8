//! Resonance HTTP client
//!
//! This crate provides the request/response plumbing shared by every
//! Resonance API wrapper: a deadline-bounded transport, the structured error
//! mapper, the request facade with envelope unwrapping, query parameter
//! serialization and an opt-in retry helper.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api_error;
pub mod client;
pub mod query;
pub mod retry;
pub mod transport;

pub use api_error::{map_error, ApiError, UNKNOWN_ERROR_CODE};
pub use client::{ClientConfig, HttpClient};
pub use query::{QueryParams, QueryValue};
pub use retry::{retry, Backoff, RetryConfig};
pub use transport::{HttpMethod, RawRequest, RawResponse, ReqwestTransport, Transport};

use std::time::Duration;

/// Result type for Resonance client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Resonance client operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Network error other than a timeout (DNS, connection refused, TLS)
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// No response arrived before the configured deadline
    #[error("Request timeout after {}ms", .timeout.as_millis())]
    Timeout {
        /// The configured per-request timeout
        timeout: Duration,
    },

    /// Non-2xx response from the API
    #[error(transparent)]
    Api(#[from] ApiError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL and path did not form a valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Check if this error is a deadline expiry
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Check if this error happened below the HTTP layer and may succeed on retry
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Timeout { .. })
    }

    /// Get the structured API failure, if any
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}
