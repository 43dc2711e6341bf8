//! Integration tests for the HTTP client
//!
//! These tests use wiremock to stand up a mock Resonance API and exercise
//! the full request/response cycle, error mapping and the deadline.

use resonance_client::{ClientConfig, Error, HttpClient, QueryParams, RetryConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
struct TestValidator {
    validator_address: String,
    total_stake: String,
}

fn validator() -> TestValidator {
    TestValidator { validator_address: "0xabc".to_string(), total_stake: "1000".to_string() }
}

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(ClientConfig::new(format!("{}/", server.uri()))).unwrap()
}

// =============================================================================
// Successful Request Tests
// =============================================================================

#[tokio::test]
async fn test_fetch_unwraps_data_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/validators/0xabc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "data": validator(), "meta": { "epoch": 12 } })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response: TestValidator = client.fetch_json("/eth/v1/validators/0xabc", None).await.unwrap();

    assert_eq!(response, validator());
}

#[tokio::test]
async fn test_fetch_bare_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/validators/0xabc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(validator()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response: TestValidator = client.fetch_json("/eth/v1/validators/0xabc", None).await.unwrap();

    assert_eq!(response, validator());
}

#[tokio::test]
async fn test_fetch_with_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/leaderboard/validators"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = QueryParams::new().param("limit", 5u32).opt_param("offset", None::<u32>);
    let response: Vec<serde_json::Value> =
        client.fetch_json("/eth/v1/leaderboard/validators", Some(&params)).await.unwrap();
    assert!(response.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("limit=5"));
}

#[tokio::test]
async fn test_submit_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eth/v1/referrals"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "validator_address": "0xabc" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "referral_code": "CODE1" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response: serde_json::Value = client
        .submit_json("/eth/v1/referrals", Some(&serde_json::json!({ "validator_address": "0xabc" })))
        .await
        .unwrap();

    assert_eq!(response, serde_json::json!({ "referral_code": "CODE1" }));
}

#[tokio::test]
async fn test_submit_without_body_sends_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eth/v1/referrals/apply"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "message": "ok" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let _: serde_json::Value =
        client.submit_json::<_, ()>("/eth/v1/referrals/apply", None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_remove_resource() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/eth/v1/referrals/CODE1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "message": "deleted" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response: serde_json::Value = client.remove_resource("/eth/v1/referrals/CODE1").await.unwrap();
    assert_eq!(response["message"], "deleted");
}

// =============================================================================
// Header Tests
// =============================================================================

#[tokio::test]
async fn test_bearer_header_set_and_removed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/global"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    client.set_bearer(Some("X"));
    let _: serde_json::Value = client.fetch_json("/eth/v1/global", None).await.unwrap();

    client.set_bearer(None);
    let _: serde_json::Value = client.fetch_json("/eth/v1/global", None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].headers.get("authorization").unwrap(), "Bearer X");
    assert!(requests[1].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_default_and_custom_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/global"))
        .and(header("x-api-key", "secret123"))
        .and(header("x-client-version", "2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(mock_server.uri()).with_header("X-API-Key", "secret123");
    let client = HttpClient::new(config).unwrap();
    client.set_header("X-Client-Version", "2.0");

    let _: serde_json::Value = client.fetch_json("/eth/v1/global", None).await.unwrap();
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_404_structured_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/validators/0xmissing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": { "code": "NOT_FOUND", "message": "no such validator" }
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result: Result<TestValidator, Error> =
        client.fetch_json("/eth/v1/validators/0xmissing", None).await;

    let error = result.unwrap_err();
    let api = error.api_error().expect("API error");
    assert_eq!(api.status(), 404);
    assert_eq!(api.code(), "NOT_FOUND");
    assert_eq!(api.message(), "no such validator");
}

#[tokio::test]
async fn test_500_non_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/global"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.fetch_json::<serde_json::Value>("/eth/v1/global", None).await.unwrap_err();

    let api = error.api_error().expect("API error");
    assert_eq!(api.status(), 500);
    assert_eq!(api.code(), "UNKNOWN_ERROR");
    assert_eq!(api.message(), "HTTP 500: Internal Server Error");
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/global"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let error = client.fetch_json::<serde_json::Value>("/eth/v1/global", None).await.unwrap_err();
    assert!(matches!(error, Error::Json(_)));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/global"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(mock_server.uri()).with_timeout(Duration::from_millis(10));
    let client = HttpClient::new(config).unwrap();

    let error = client.fetch_json::<serde_json::Value>("/eth/v1/global", None).await.unwrap_err();
    assert!(error.is_timeout());
    assert!(error.to_string().contains("10"));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = HttpClient::new(ClientConfig::new(uri)).unwrap();
    let error = client.fetch_json::<serde_json::Value>("/eth/v1/global", None).await.unwrap_err();
    assert!(matches!(error, Error::Transport(_)));
}

// =============================================================================
// Retry Behavior Tests
// =============================================================================

#[tokio::test]
async fn test_retry_recovers_from_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/network/apr"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({}))
                .set_delay(Duration::from_secs(5)),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/network/apr"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": { "network_apr": 0.12 } })),
        )
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(mock_server.uri())
        .with_timeout(Duration::from_millis(200))
        .with_retry(RetryConfig::new(3).with_base_delay(Duration::from_millis(10)));
    let client = HttpClient::new(config).unwrap();

    let response: serde_json::Value = client.fetch_json("/eth/v1/network/apr", None).await.unwrap();
    assert_eq!(response["network_apr"], 0.12);
}

#[tokio::test]
async fn test_no_retry_on_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eth/v1/global"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "error": { "code": "UNAVAILABLE", "message": "try later" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new(mock_server.uri())
        .with_retry(RetryConfig::new(3).with_base_delay(Duration::from_millis(10)));
    let client = HttpClient::new(config).unwrap();

    let error = client.fetch_json::<serde_json::Value>("/eth/v1/global", None).await.unwrap_err();
    assert_eq!(error.api_error().map(|e| e.code()), Some("UNAVAILABLE"));
}
