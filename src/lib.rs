//! Resonance SDK
//!
//! Typed async client for the Resonance staking-network REST API.
//! [`ResonanceSdk`] owns one [`HttpClient`] shared by every resource wrapper
//! and an [`AuthService`] that keeps the session token.
//!
//! # Example
//!
//! ```rust,no_run
//! use resonance_sdk::{ClientConfig, ResonanceSdk};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdk = ResonanceSdk::new(ClientConfig::new("https://api.resonance.network"))?;
//!
//!     let stats = sdk.global().stats().await?;
//!     println!("{} validators at epoch {}", stats.total_validators, stats.epoch);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::sync::Arc;
use thiserror::Error;

pub use resonance_api::{
    self as api, DelegatorsApi, GlobalApi, ReferralsApi, SlashingApi, ValidatorsApi,
};
pub use resonance_auth::{
    self as auth, AuthError, AuthResponse, AuthService, MemorySessionStore, NoopSessionStore,
    Role, SessionState, SessionStore, UserInfo, WalletSigner,
};
pub use resonance_client::{
    self as client, ApiError, ClientConfig, HttpClient, QueryParams, RetryConfig, Transport,
};

/// Errors surfaced by the SDK facade
#[derive(Debug, Error)]
pub enum SdkError {
    /// Request failed
    #[error(transparent)]
    Client(#[from] resonance_client::Error),

    /// Authentication failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl SdkError {
    /// Get the structured API failure, if the server sent one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            SdkError::Client(err) => err.api_error(),
            SdkError::Auth(err) => err.api_error(),
        }
    }
}

/// Result type for SDK facade operations
pub type Result<T> = std::result::Result<T, SdkError>;

/// Entry point composing the client, session and resource wrappers
#[derive(Debug)]
pub struct ResonanceSdk {
    client: Arc<HttpClient>,
    auth: AuthService,
    validators: ValidatorsApi,
    delegators: DelegatorsApi,
    referrals: ReferralsApi,
    global: GlobalApi,
    slashing: SlashingApi,
}

impl ResonanceSdk {
    /// Create an SDK that keeps the session token in memory
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_session_store(config, Arc::new(MemorySessionStore::new()))
    }

    /// Create an SDK with a caller-chosen token store
    pub fn with_session_store(config: ClientConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let client = Arc::new(HttpClient::new(config)?);
        Ok(Self::from_client(client, store))
    }

    /// Compose the SDK around an existing client
    pub fn from_client(client: Arc<HttpClient>, store: Arc<dyn SessionStore>) -> Self {
        Self {
            auth: AuthService::new(client.clone(), store),
            validators: ValidatorsApi::new(client.clone()),
            delegators: DelegatorsApi::new(client.clone()),
            referrals: ReferralsApi::new(client.clone()),
            global: GlobalApi::new(client.clone()),
            slashing: SlashingApi::new(client.clone()),
            client,
        }
    }

    /// The shared HTTP client
    pub fn client(&self) -> &Arc<HttpClient> {
        &self.client
    }

    /// Wallet authentication and session queries
    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Validator endpoints
    pub fn validators(&self) -> &ValidatorsApi {
        &self.validators
    }

    /// Delegator endpoints
    pub fn delegators(&self) -> &DelegatorsApi {
        &self.delegators
    }

    /// Referral endpoints
    pub fn referrals(&self) -> &ReferralsApi {
        &self.referrals
    }

    /// Network statistics and leaderboards
    pub fn global(&self) -> &GlobalApi {
        &self.global
    }

    /// Slashing events
    pub fn slashing(&self) -> &SlashingApi {
        &self.slashing
    }

    /// Set or clear the bearer credential sent with every request
    ///
    /// The session store is left untouched.
    pub fn set_auth_token(&self, token: Option<&str>) {
        self.client.set_bearer(token);
    }

    /// Insert or overwrite a default header
    pub fn set_header(&self, key: impl Into<String>, value: impl Into<String>) {
        self.client.set_header(key, value);
    }

    /// The token held by the session store
    pub fn auth_token(&self) -> Option<String> {
        self.auth.token()
    }

    /// True when the stored token has not expired
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Forget the stored token and stop sending it
    pub fn logout(&self) {
        self.auth.logout();
        self.client.set_bearer(None);
    }

    /// Send the stored token as bearer again, if it is still valid
    ///
    /// Returns whether a session was restored. An expired or malformed
    /// token is left in the store but not sent.
    pub fn restore_session(&self) -> bool {
        match (self.auth.state(), self.auth.token()) {
            (SessionState::Valid | SessionState::Expiring, Some(token)) => {
                self.client.set_bearer(Some(&token));
                tracing::debug!("session restored from store");
                true
            }
            (state, _) => {
                tracing::debug!(?state, "no session to restore");
                false
            }
        }
    }

    /// Sign in with a wallet and send the new token on subsequent requests
    pub async fn login_with_wallet(&self, signer: &dyn WalletSigner, role: Role) -> Result<AuthResponse> {
        let response = self.auth.connect_wallet(signer, role).await?;
        self.client.set_bearer(Some(&response.token));
        Ok(response)
    }
}
