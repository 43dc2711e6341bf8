//! Test fixtures for Resonance authentication
//!
//! Builds unsigned JWT-shaped tokens and a fixed-answer wallet signer.
//! Tokens produced here carry a dummy signature and would be rejected by
//! any server that verifies them.

use crate::auth::WalletSigner;
use crate::claims::Role;
use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;

/// Build a token around an arbitrary JSON payload
pub fn token_with_payload(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{payload}.test-signature")
}

/// Build a token that expires at the given Unix second
pub fn token_expiring_at(address: &str, role: Role, exp: i64) -> String {
    token_with_payload(&serde_json::json!({
        "address": address,
        "role": role,
        "exp": exp,
        "iat": exp - 3600,
        "iss": "resonance-test"
    }))
}

/// Build a token that expires `seconds` from now
pub fn token_expiring_in(address: &str, role: Role, seconds: i64) -> String {
    token_expiring_at(address, role, Utc::now().timestamp() + seconds)
}

/// Wallet signer with a fixed address and signature
#[derive(Debug, Clone)]
pub struct StaticSigner {
    /// Address reported by the signer
    pub address: String,
    /// Signature returned for every message
    pub signature: String,
}

impl StaticSigner {
    /// Create a signer
    pub fn new(address: impl Into<String>, signature: impl Into<String>) -> Self {
        Self { address: address.into(), signature: signature.into() }
    }
}

#[async_trait]
impl WalletSigner for StaticSigner {
    async fn address(&self) -> anyhow::Result<String> {
        Ok(self.address.clone())
    }

    async fn sign_message(&self, _message: &str) -> anyhow::Result<String> {
        Ok(self.signature.clone())
    }
}
