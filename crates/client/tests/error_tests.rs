//! Error handling and client configuration tests.
//!
//! This module tests error handling for various failure modes:
//! - HTTP error status codes (401, 403, 404, 500)
//! - Malformed JSON responses
//! - Timeouts and refused connections
//! - Client configuration (trailing slash normalization)
//!
//! # Invariants
//! - Every failure is returned after a single request
//! - Error display formatting includes relevant details
//!
//! # What this does NOT handle
//! - Search lifecycle errors (see poller_tests.rs)

mod common;

use std::time::Duration;

use common::*;
use secrecy::SecretString;
use splunk_search_client::{ClientError, SplunkClient};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_unauthorized_access() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "messages": [{"type": "ERROR", "text": "Unauthorized"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_server_info(&client, &mock_server.uri(), "bad-token")
        .await
        .unwrap_err();

    assert!(err.is_auth_error());
    assert!(!err.is_connection_error());
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_multiple_messages_are_joined() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "messages": [
                {"type": "ERROR", "text": "first"},
                {"type": "ERROR", "text": "second"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let err = endpoints::get_server_info(&Client::new(), &mock_server.uri(), TEST_TOKEN)
        .await
        .unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("first"));
    assert!(msg.contains("second"));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_plain_text_error_body_is_kept() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let err = endpoints::get_server_info(&Client::new(), &mock_server.uri(), TEST_TOKEN)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let result = endpoints::get_server_info(&Client::new(), &mock_server.uri(), TEST_TOKEN).await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn test_request_timeout_is_connection_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = SplunkClient::builder()
        .base_url(mock_server.uri())
        .token(SecretString::new(TEST_TOKEN.to_string().into()))
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = client.server_info().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
    assert!(err.is_connection_error());
}

#[tokio::test]
async fn test_connection_refused() {
    // Port 1 is reserved and nothing listens there in test environments.
    let err = endpoints::get_server_info(&Client::new(), "http://127.0.0.1:1", TEST_TOKEN)
        .await
        .unwrap_err();

    assert!(err.is_connection_error());
    assert_eq!(err.status(), None);

    // The reqwest error is reachable as the source, not repeated in the message
    assert_eq!(err.to_string(), "Transport failure");
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("127.0.0.1:1"));
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("server/server_info.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SplunkClient::builder()
        .base_url(format!("{}/", mock_server.uri()))
        .token(SecretString::new(TEST_TOKEN.to_string().into()))
        .build()
        .unwrap();

    assert_eq!(client.base_url(), mock_server.uri());
    client.server_info().await.unwrap();
}
