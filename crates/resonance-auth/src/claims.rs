//! JWT claims decoding
//!
//! Resonance issues JWTs whose payload carries the wallet address, the role
//! and the usual `iat`/`exp`/`iss` fields. [`decode_claims`] reads that
//! payload WITHOUT verifying the signature. The result is only fit for UI
//! decisions; the server re-validates every authorized request.
//!
//! Every claim is optional at decode time. Only the segment count, the
//! base64 encoding and the JSON syntax make a token malformed; callers
//! decide which claims they need.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// base64url, padding optional
const URL_SAFE_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Standard alphabet, padding optional
const STANDARD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Errors that can occur while decoding claims
#[derive(Debug, Error)]
pub enum ClaimsError {
    /// Wrong segment count, bad encoding or invalid JSON payload
    #[error("Malformed token: {0}")]
    MalformedToken(String),
}

/// Account role embedded in the token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Validator operator
    Validator,
    /// Delegator (the default for wallet sign-in)
    #[default]
    Delegator,
}

impl Role {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Validator => "validator",
            Role::Delegator => "delegator",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validator" => Ok(Role::Validator),
            "delegator" => Ok(Role::Delegator),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// Decoded JWT payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Wallet address the token was issued to
    #[serde(default)]
    pub address: Option<String>,
    /// Account role as sent by the server
    #[serde(default)]
    pub role: Option<String>,
    /// Expiration, Unix seconds (may be fractional)
    #[serde(default)]
    pub exp: Option<f64>,
    /// Issued at, Unix seconds
    #[serde(default)]
    pub iat: Option<f64>,
    /// Issuer identifier
    #[serde(default)]
    pub iss: Option<String>,
}

impl Claims {
    /// The role, when it is one this SDK knows
    pub fn known_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|role| role.parse().ok())
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(seconds_to_datetime)
    }

    /// Issue time as a timestamp
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.iat.and_then(seconds_to_datetime)
    }

    /// Milliseconds left until expiry (negative once expired)
    ///
    /// `None` when the token carries no usable `exp`.
    pub fn millis_until_expiry(&self, now: DateTime<Utc>) -> Option<i64> {
        let exp = self.exp.filter(|exp| exp.is_finite())?;
        let expires_ms = (exp * 1000.0) as i64;
        Some(expires_ms.saturating_sub(now.timestamp_millis()))
    }
}

fn seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0) as i64)
}

/// Decode the claims of a JWT without verifying it
///
/// The payload may use either the URL-safe or the standard base64 alphabet.
///
/// # Example
///
/// ```rust
/// use resonance_auth::decode_claims;
///
/// assert!(decode_claims("not-a-token").is_err());
/// ```
pub fn decode_claims(token: &str) -> Result<Claims, ClaimsError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_, payload, _] = segments.as_slice() else {
        return Err(ClaimsError::MalformedToken(format!(
            "expected 3 segments, found {}",
            segments.len()
        )));
    };

    let bytes = URL_SAFE_ENGINE
        .decode(payload)
        .or_else(|_| STANDARD_ENGINE.decode(payload))
        .map_err(|e| ClaimsError::MalformedToken(format!("invalid base64 payload: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| ClaimsError::MalformedToken(format!("invalid claims JSON: {e}")))
}
