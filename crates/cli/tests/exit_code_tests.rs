//! Integration tests for structured exit codes.
//!
//! These tests verify that `splunk` returns the documented exit code for
//! each failure class, so scripts can branch on it.

mod common;

use common::{splunk_cmd, splunk_cmd_for};
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_info_responding(status: u16, body: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/services/server/info"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = server_info_responding(
        200,
        json!({"entry": [{"content": {"serverName": "idx-01", "version": "9.2.1"}}]}),
    )
    .await;

    splunk_cmd_for(&server)
        .arg("server-info")
        .assert()
        .code(0)
        .stdout("Splunk Server Information:\n  serverName: idx-01\n  version: 9.2.1\n");
}

#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let server = server_info_responding(
        401,
        json!({"messages": [{"type": "WARN", "text": "call not properly authenticated"}]}),
    )
    .await;

    splunk_cmd_for(&server)
        .args(["--token", "expired-token", "server-info"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("call not properly authenticated"));
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    splunk_cmd()
        .env("SPLUNK_HOST", "http://127.0.0.1:1")
        .arg("server-info")
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_not_found_returns_exit_code_4() {
    let server = server_info_responding(
        404,
        json!({"messages": [{"type": "ERROR", "text": "Not Found"}]}),
    )
    .await;

    splunk_cmd_for(&server).arg("server-info").assert().code(4);
}

#[tokio::test]
async fn test_permission_denied_returns_exit_code_6() {
    let server = server_info_responding(
        403,
        json!({"messages": [{"type": "ERROR", "text": "Forbidden"}]}),
    )
    .await;

    splunk_cmd_for(&server).arg("server-info").assert().code(6);
}

#[test]
fn test_missing_host_returns_exit_code_7() {
    splunk_cmd()
        .arg("list-alerts")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("configure"));
}

#[test]
fn test_invalid_port_returns_exit_code_5() {
    splunk_cmd()
        .env("SPLUNK_HOST", "splunk.example.com")
        .env("SPLUNK_PORT", "not-a-port")
        .arg("server-info")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("SPLUNK_PORT"));
}

#[test]
fn test_invalid_event_json_returns_exit_code_5() {
    // Rejected before any request is made
    splunk_cmd()
        .env("SPLUNK_HOST", "http://127.0.0.1:1")
        .args(["send-event", "main", "", "", "{not json"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Failed to parse event JSON"));
}
