//! Server info and event submission tests.
//!
//! # Invariants
//! - Server info fields keep the order the server sent them in
//! - Event metadata left empty is not sent
//!
//! # What this does NOT handle
//! - Parsing the event JSON typed by the user (see `EventPayload::parse_event`)

mod common;

use common::*;
use serde_json::json;
use splunk_search_client::{ClientError, EventPayload};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};

#[tokio::test]
async fn test_get_server_info() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .and(query_param("output_mode", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("server/server_info.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let info = endpoints::get_server_info(&client, &mock_server.uri(), TEST_TOKEN)
        .await
        .unwrap();

    assert_eq!(info.version(), Some("9.2.1"));
    assert_eq!(info.len(), 6);

    let keys: Vec<&str> = info.entries().map(|(k, _)| k).collect();
    assert_eq!(
        keys,
        vec!["serverName", "version", "build", "os_name", "server_roles", "numberOfCores"]
    );

    let rendered: Vec<String> = info.entries().map(|(_, v)| v.to_string()).collect();
    assert_eq!(rendered[4], r#"["indexer","search_head"]"#);
    assert_eq!(rendered[5], "8");
}

#[tokio::test]
async fn test_get_server_info_without_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"entry": []})))
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let err = endpoints::get_server_info(&client, &mock_server.uri(), TEST_TOKEN)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode(ref m) if m.contains("no server info found")));
}

#[tokio::test]
async fn test_get_server_info_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.server_info().await.unwrap_err();

    assert!(err.is_permission_error());
    assert!(err.to_string().contains("Forbidden"));
}

#[tokio::test]
async fn test_send_event() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/receivers/simple"))
        .and(header("Authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "event": {"action": "login", "user": "alice"},
            "index": "main",
            "sourcetype": "app:json"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"index": "main"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let event = EventPayload::parse_event(r#"{"action":"login","user":"alice"}"#).unwrap();
    let payload = EventPayload::new(event, "main", "", "app:json");

    let client = client_for(&mock_server);
    client.send_event(&payload).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent.get("source").is_none());
    assert!(sent["time"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_send_event_unknown_index() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/receivers/simple"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "messages": [{"type": "ERROR", "text": "Unknown index 'nope'"}]
        })))
        .mount(&mock_server)
        .await;

    let payload = EventPayload::new(serde_json::Map::new(), "nope", "", "");
    let err = endpoints::send_event(&Client::new(), &mock_server.uri(), TEST_TOKEN, &payload)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("Unknown index 'nope'"));
}
