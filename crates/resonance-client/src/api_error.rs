//! Structured API failures
//!
//! Error bodies from the Resonance API look like
//! `{"error": {"code": "NOT_FOUND", "message": "no such validator"}}`.
//! [`map_error`] turns any non-2xx [`RawResponse`] into an [`ApiError`],
//! falling back to `UNKNOWN_ERROR` when the body does not have that shape.

use crate::transport::RawResponse;
use serde::Deserialize;

/// Application error code used when the body carries no structured code
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// API error with HTTP status, application code and message
///
/// # Examples
/// ```
/// use resonance_client::ApiError;
///
/// let error = ApiError::new(404, "NOT_FOUND", "no such validator");
/// assert_eq!(error.status(), 404);
/// assert_eq!(error.code(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API error {status} ({code}): {message}")]
pub struct ApiError {
    status: u16,
    code: String,
    message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self { status, code: code.into(), message: message.into() }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the application error code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

/// Map a non-2xx response to an [`ApiError`]
///
/// Never fails: an unreadable body yields the default code and a message
/// synthesized from the status line.
pub fn map_error(response: &RawResponse) -> ApiError {
    let fallback_message = format!("HTTP {}: {}", response.status, response.status_text);

    let body = serde_json::from_slice::<ErrorEnvelope>(&response.body)
        .ok()
        .and_then(|envelope| envelope.error);

    match body {
        Some(ErrorBody { code, message }) => ApiError::new(
            response.status,
            code.unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string()),
            message.unwrap_or(fallback_message),
        ),
        None => ApiError::new(response.status, UNKNOWN_ERROR_CODE, fallback_message),
    }
}
