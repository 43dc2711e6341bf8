//! Resonance wallet authentication and session handling
//!
//! This crate covers the credential side of the SDK:
//! - Bearer token storage behind the [`SessionStore`] capability
//! - JWT claims decoding (no signature verification)
//! - Expiry evaluation for UI decisions
//! - The wallet sign-in flow against the Resonance auth endpoints

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod claims;
pub mod session;
pub mod store;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use auth::{
    AuthError, AuthResponse, AuthService, LoginChallenge, LoginRequest, NonceChallenge,
    NonceRequest, VerifyRequest, VerifyResponse, WalletSigner,
};
pub use claims::{decode_claims, Claims, ClaimsError, Role};
pub use session::{SessionEvaluator, SessionState, UserInfo, EXPIRING_SOON_WINDOW_MS};
pub use store::{MemorySessionStore, NoopSessionStore, SessionStore};
