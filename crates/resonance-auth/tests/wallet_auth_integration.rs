//! Integration tests for the wallet sign-in flow
//!
//! A wiremock server stands in for the Resonance auth endpoints; tokens are
//! built with the `test-utils` fixtures.

use resonance_auth::test_utils::{token_expiring_in, StaticSigner};
use resonance_auth::{
    AuthError, AuthService, MemorySessionStore, NoopSessionStore, Role, SessionState,
    SessionStore, VerifyRequest,
};
use resonance_client::{ClientConfig, HttpClient};
use std::sync::Arc;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<HttpClient> {
    Arc::new(HttpClient::new(ClientConfig::new(server.uri())).unwrap())
}

// =============================================================================
// Server Challenge Tests
// =============================================================================

#[tokio::test]
async fn test_get_nonce_unwraps_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eth/v1/auth/nonce"))
        .and(body_json(serde_json::json!({ "address": "0xabc" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "nonce": "n-123", "message": "Sign n-123" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = AuthService::new(client_for(&mock_server), Arc::new(MemorySessionStore::new()));
    let challenge = auth.get_nonce("0xabc").await.unwrap();

    assert_eq!(challenge.nonce, "n-123");
    assert_eq!(challenge.message, "Sign n-123");
}

#[tokio::test]
async fn test_get_nonce_failure_has_context() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eth/v1/auth/nonce"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": { "code": "RATE_LIMITED", "message": "slow down" }
        })))
        .mount(&mock_server)
        .await;

    let auth = AuthService::new(client_for(&mock_server), Arc::new(MemorySessionStore::new()));
    let err = auth.get_nonce("0xabc").await.unwrap_err();

    assert!(matches!(err, AuthError::Authentication { context: "Failed to get nonce", .. }));
    assert!(err.to_string().starts_with("Failed to get nonce: "));
    assert_eq!(err.api_error().map(|e| e.code()), Some("RATE_LIMITED"));
}

#[tokio::test]
async fn test_verify_stores_token() {
    let mock_server = MockServer::start().await;
    let token = token_expiring_in("0xabc", Role::Validator, 3600);

    Mock::given(method("POST"))
        .and(path("/eth/v1/auth/verify"))
        .and(body_json(serde_json::json!({
            "address": "0xabc",
            "signature": "0xsig",
            "role": "validator"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": { "token": token.clone() } })),
        )
        .mount(&mock_server)
        .await;

    let store = Arc::new(MemorySessionStore::new());
    let auth = AuthService::new(client_for(&mock_server), store.clone());

    let request = VerifyRequest {
        address: "0xabc".to_string(),
        signature: "0xsig".to_string(),
        role: Role::Validator,
    };
    let response = auth.verify(&request).await.unwrap();

    assert_eq!(response.token, token);
    assert_eq!(store.get(), Some(token));
    assert_eq!(auth.user_info().map(|info| info.role), Some(Role::Validator));
}

// =============================================================================
// Wallet Login Tests
// =============================================================================

#[tokio::test]
async fn test_connect_wallet_round_trip() {
    let mock_server = MockServer::start().await;
    let token = token_expiring_in("0xdef", Role::Delegator, 7200);

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": token.clone(),
            "address": "0xdef",
            "role": "delegator",
            "expires_at": 1_900_000_000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = AuthService::new(client_for(&mock_server), Arc::new(MemorySessionStore::new()));
    let signer = StaticSigner::new("0xdef", "0xfeed");

    let response = auth.connect_wallet(&signer, Role::default()).await.unwrap();
    assert_eq!(response.address, "0xdef");
    assert_eq!(response.role, "delegator");
    assert!(auth.is_authenticated());
    assert!(!auth.is_expiring_soon());
    assert_eq!(auth.state(), SessionState::Valid);

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["address"], "0xdef");
    assert_eq!(body["signature"], "0xfeed");
    assert_eq!(body["role"], "delegator");
    assert!(body["nonce"].as_u64().is_some_and(|n| n < 1_000_000));
    assert!(body["timestamp"].as_i64().is_some());

    let message = body["message"].as_str().unwrap();
    assert!(message.contains("Address: 0xdef"));
    assert!(message.contains(&format!("Nonce: {}", body["nonce"])));
    assert!(message.ends_with("This will not trigger any blockchain transaction or cost gas fees."));
}

#[tokio::test]
async fn test_connect_wallet_with_noop_store_forgets_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": token_expiring_in("0xdef", Role::Delegator, 7200),
            "address": "0xdef",
            "role": "delegator",
            "expires_at": 1_900_000_000
        })))
        .mount(&mock_server)
        .await;

    let auth = AuthService::new(client_for(&mock_server), Arc::new(NoopSessionStore));
    let signer = StaticSigner::new("0xdef", "0xfeed");

    let response = auth.connect_wallet(&signer, Role::Delegator).await.unwrap();
    assert!(!response.token.is_empty());
    assert!(!auth.is_authenticated());
    assert_eq!(auth.state(), SessionState::Absent);
}

#[tokio::test]
async fn test_login_failure_without_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let auth = AuthService::new(client_for(&mock_server), Arc::new(MemorySessionStore::new()));
    let signer = StaticSigner::new("0xdef", "0xfeed");

    let err = auth.connect_wallet(&signer, Role::Delegator).await.unwrap_err();
    let api = err.api_error().unwrap();

    assert!(err.to_string().starts_with("Authentication failed: "));
    assert_eq!(api.status(), 500);
    assert_eq!(api.code(), "UNKNOWN_ERROR");
    assert_eq!(api.message(), "HTTP 500: Internal Server Error");
    assert!(auth.token().is_none());
}
