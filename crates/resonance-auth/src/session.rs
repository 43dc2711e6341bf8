//! Session evaluation
//!
//! Answers "is the user signed in" and "should we re-authenticate soon"
//! from the stored token and the wall clock. Nothing is cached: each query
//! re-reads the store and re-decodes the claims.
//!
//! Decode failures never escape. A malformed token, or one without an
//! `exp` claim, counts as not authenticated and as expiring, which pushes
//! the UI towards signing in again. Expiry checks read `exp` only; the
//! address and role matter just for [`SessionEvaluator::user_info`].

use crate::claims::{decode_claims, Claims, Role};
use crate::store::SessionStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A token with less than this many milliseconds left is expiring soon
pub const EXPIRING_SOON_WINDOW_MS: i64 = 5 * 60 * 1000;

/// Where the stored credential currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No token stored
    Absent,
    /// Token valid for longer than the expiring-soon window
    Valid,
    /// Token still valid but inside the expiring-soon window
    Expiring,
    /// Token expiry is in the past
    Expired,
    /// Stored token could not be decoded or carries no `exp`
    Malformed,
}

/// Identity projected from the token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Wallet address
    pub address: String,
    /// Account role
    pub role: Role,
}

/// Check whether a token's expiry is still in the future
pub fn is_token_valid_at(token: &str, now: DateTime<Utc>) -> bool {
    decode_claims(token)
        .ok()
        .and_then(|claims| claims.millis_until_expiry(now))
        .is_some_and(|remaining| remaining > 0)
}

/// Check whether a token expires within [`EXPIRING_SOON_WINDOW_MS`]
pub fn is_token_expiring_soon_at(token: &str, now: DateTime<Utc>) -> bool {
    decode_claims(token)
        .ok()
        .and_then(|claims| claims.millis_until_expiry(now))
        .is_none_or(|remaining| remaining < EXPIRING_SOON_WINDOW_MS)
}

/// Evaluates the credential held by a [`SessionStore`]
#[derive(Clone)]
pub struct SessionEvaluator {
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for SessionEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEvaluator").field("has_token", &self.store.get().is_some()).finish()
    }
}

impl SessionEvaluator {
    /// Evaluate the tokens held by `store`
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// The stored token, if any
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Decoded claims of the stored token; `None` when absent or malformed
    pub fn claims(&self) -> Option<Claims> {
        self.token().and_then(|token| decode_claims(&token).ok())
    }

    /// True when a token is stored and its expiry is in the future
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(Utc::now())
    }

    /// [`Self::is_authenticated`] against an explicit instant
    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> bool {
        match self.token() {
            Some(token) => is_token_valid_at(&token, now),
            None => false,
        }
    }

    /// True when no token is stored, or it expires within five minutes
    pub fn is_expiring_soon(&self) -> bool {
        self.is_expiring_soon_at(Utc::now())
    }

    /// [`Self::is_expiring_soon`] against an explicit instant
    pub fn is_expiring_soon_at(&self, now: DateTime<Utc>) -> bool {
        match self.token() {
            Some(token) => is_token_expiring_soon_at(&token, now),
            None => true,
        }
    }

    /// Address and role of the stored token
    ///
    /// `None` when either claim is missing or the role is not recognised.
    pub fn user_info(&self) -> Option<UserInfo> {
        let claims = self.claims()?;
        let role = claims.known_role()?;
        Some(UserInfo { address: claims.address?, role })
    }

    /// Current position in the Absent/Valid/Expiring/Expired lifecycle
    pub fn state(&self) -> SessionState {
        self.state_at(Utc::now())
    }

    /// [`Self::state`] against an explicit instant
    pub fn state_at(&self, now: DateTime<Utc>) -> SessionState {
        let Some(token) = self.token() else {
            return SessionState::Absent;
        };

        match decode_claims(&token).ok().and_then(|claims| claims.millis_until_expiry(now)) {
            None => SessionState::Malformed,
            Some(remaining) => {
                if remaining <= 0 {
                    SessionState::Expired
                } else if remaining < EXPIRING_SOON_WINDOW_MS {
                    SessionState::Expiring
                } else {
                    SessionState::Valid
                }
            }
        }
    }
}
