//! Wallet authentication
//!
//! Sign-in proves control of a wallet: the SDK renders a challenge message,
//! the caller's [`WalletSigner`] signs it, and the signed payload is posted
//! to the login endpoint. No blockchain transaction is involved.
//!
//! # Example
//!
//! ```rust,no_run
//! use resonance_auth::{AuthService, MemorySessionStore, Role, WalletSigner};
//! use resonance_client::{ClientConfig, HttpClient};
//! use std::sync::Arc;
//!
//! async fn sign_in(signer: &dyn WalletSigner) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(HttpClient::new(ClientConfig::new("https://api.resonance.network"))?);
//!     let auth = AuthService::new(client, Arc::new(MemorySessionStore::new()));
//!
//!     let session = auth.connect_wallet(signer, Role::Delegator).await?;
//!     println!("Signed in as {} until {}", session.address, session.expires_at);
//!     Ok(())
//! }
//! ```

use crate::claims::{Claims, Role};
use crate::session::{SessionEvaluator, SessionState, UserInfo};
use crate::store::SessionStore;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use resonance_client::{ApiError, HttpClient};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Upper bound (exclusive) for the challenge nonce
const NONCE_RANGE: u32 = 1_000_000;

/// Errors that can occur during authentication
#[derive(Debug, Error)]
pub enum AuthError {
    /// The auth endpoint rejected the request or could not be reached
    #[error("{context}: {source}")]
    Authentication {
        /// Which step failed ("Failed to get nonce", "Authentication failed")
        context: &'static str,
        /// Underlying client failure, API error code included
        #[source]
        source: resonance_client::Error,
    },

    /// The wallet could not provide its address or a signature
    #[error("Wallet signer error: {0}")]
    Signer(String),
}

impl AuthError {
    fn authentication(context: &'static str) -> impl FnOnce(resonance_client::Error) -> Self {
        move |source| {
            tracing::warn!(context, error = %source, "authentication request failed");
            AuthError::Authentication { context, source }
        }
    }

    fn signer(err: anyhow::Error) -> Self {
        AuthError::Signer(format!("{err:#}"))
    }

    /// Get the structured API failure, if the server sent one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            AuthError::Authentication { source, .. } => source.api_error(),
            AuthError::Signer(_) => None,
        }
    }
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Message-signing capability of an external wallet
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletSigner: Send + Sync {
    /// Address of the signing account
    async fn address(&self) -> anyhow::Result<String>;

    /// Sign the exact bytes of `message`, returning the signature as a hex string
    async fn sign_message(&self, message: &str) -> anyhow::Result<String>;
}

/// Request body for `POST /eth/v1/auth/nonce`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceRequest {
    /// Wallet address
    pub address: String,
}

/// Server-issued challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceChallenge {
    /// Nonce to embed in the signed message
    pub nonce: String,
    /// Message to sign
    pub message: String,
}

/// Request body for `POST /eth/v1/auth/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// Wallet address
    pub address: String,
    /// Signature over the challenge message
    pub signature: String,
    /// Requested role
    pub role: Role,
}

/// Response of `POST /eth/v1/auth/verify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    /// Issued bearer token
    pub token: String,
}

/// Request body for `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Wallet address
    pub address: String,
    /// The exact message that was signed
    pub message: String,
    /// Signature over `message`
    pub signature: String,
    /// Requested role
    pub role: Role,
    /// Challenge timestamp, Unix seconds
    pub timestamp: i64,
    /// Challenge nonce
    pub nonce: u32,
}

/// Response of a successful wallet login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Issued bearer token
    pub token: String,
    /// Authenticated wallet address
    pub address: String,
    /// Granted role
    pub role: String,
    /// Token expiry, Unix seconds
    pub expires_at: i64,
}

/// Client-built sign-in challenge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginChallenge {
    /// Wallet address
    pub address: String,
    /// Requested role
    pub role: Role,
    /// Random nonce in `0..1_000_000`
    pub nonce: u32,
    /// Creation time, Unix seconds
    pub timestamp: i64,
}

impl LoginChallenge {
    /// Create a challenge with a fresh nonce and the current time
    pub fn new(address: impl Into<String>, role: Role) -> Self {
        let nonce = rand::thread_rng().gen_range(0..NONCE_RANGE);
        Self::with_values(address, role, nonce, Utc::now().timestamp())
    }

    /// Create a challenge from explicit values
    pub fn with_values(address: impl Into<String>, role: Role, nonce: u32, timestamp: i64) -> Self {
        Self { address: address.into(), role, nonce, timestamp }
    }

    /// The human-readable message the wallet signs
    pub fn message(&self) -> String {
        format!(
            "Sign this message to login to Resonance Dashboard\n\
             \n\
             Address: {}\n\
             Role: {}\n\
             Nonce: {}\n\
             Timestamp: {}\n\
             \n\
             This will not trigger any blockchain transaction or cost gas fees.",
            self.address, self.role, self.nonce, self.timestamp
        )
    }

    /// Login payload carrying `signature` over [`Self::message`]
    pub fn into_login_request(self, signature: String) -> LoginRequest {
        let message = self.message();
        LoginRequest {
            address: self.address,
            message,
            signature,
            role: self.role,
            timestamp: self.timestamp,
            nonce: self.nonce,
        }
    }
}

/// Wallet authentication against the Resonance API
pub struct AuthService {
    client: Arc<HttpClient>,
    session: SessionEvaluator,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("base_url", &self.client.base_url())
            .field("session", &self.session)
            .finish()
    }
}

impl AuthService {
    /// Create a service posting through `client` and persisting into `store`
    pub fn new(client: Arc<HttpClient>, store: Arc<dyn SessionStore>) -> Self {
        Self { client, session: SessionEvaluator::new(store) }
    }

    /// Request a server-issued challenge
    ///
    /// `POST /eth/v1/auth/nonce`
    pub async fn get_nonce(&self, address: &str) -> Result<NonceChallenge> {
        let request = NonceRequest { address: address.to_string() };
        self.client
            .submit_json("/eth/v1/auth/nonce", Some(&request))
            .await
            .map_err(AuthError::authentication("Failed to get nonce"))
    }

    /// Exchange a signed server challenge for a token and store it
    ///
    /// `POST /eth/v1/auth/verify`
    pub async fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse> {
        let response: VerifyResponse = self
            .client
            .submit_json("/eth/v1/auth/verify", Some(request))
            .await
            .map_err(AuthError::authentication("Authentication failed"))?;

        self.session.store().put(&response.token);
        tracing::info!(address = %request.address, role = %request.role, "wallet verified");

        Ok(response)
    }

    /// Sign a client-built challenge with `signer` and log in
    ///
    /// `POST /auth/login`
    pub async fn connect_wallet(&self, signer: &dyn WalletSigner, role: Role) -> Result<AuthResponse> {
        let address = signer.address().await.map_err(AuthError::signer)?;
        let challenge = LoginChallenge::new(address, role);
        self.login_with_challenge(signer, challenge).await
    }

    /// Sign a prepared challenge with `signer` and log in
    pub async fn login_with_challenge(
        &self,
        signer: &dyn WalletSigner,
        challenge: LoginChallenge,
    ) -> Result<AuthResponse> {
        let signature = signer.sign_message(&challenge.message()).await.map_err(AuthError::signer)?;
        let request = challenge.into_login_request(signature);

        let response: AuthResponse = self
            .client
            .submit_json("/auth/login", Some(&request))
            .await
            .map_err(AuthError::authentication("Authentication failed"))?;

        self.session.store().put(&response.token);
        tracing::info!(address = %response.address, role = %response.role, "wallet connected");

        Ok(response)
    }

    /// The stored token, if any
    pub fn token(&self) -> Option<String> {
        self.session.token()
    }

    /// Session evaluator over the same store
    pub fn session(&self) -> &SessionEvaluator {
        &self.session
    }

    /// See [`SessionEvaluator::is_authenticated`]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// See [`SessionEvaluator::is_expiring_soon`]
    pub fn is_expiring_soon(&self) -> bool {
        self.session.is_expiring_soon()
    }

    /// See [`SessionEvaluator::user_info`]
    pub fn user_info(&self) -> Option<UserInfo> {
        self.session.user_info()
    }

    /// See [`SessionEvaluator::claims`]
    pub fn claims(&self) -> Option<Claims> {
        self.session.claims()
    }

    /// See [`SessionEvaluator::state`]
    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    /// Forget the stored token
    pub fn logout(&self) {
        self.session.store().clear();
        tracing::info!("logged out");
    }
}
