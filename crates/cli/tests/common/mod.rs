//! Shared test utilities for `splunk` integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide canned Splunk job responses for wiremock servers.
//!
//! Invariants / Assumptions:
//! - `SPLUNK_TOKEN` is set to "test-token" unless overridden, so the keyring
//!   is never consulted.
//! - `SPLUNK_CONFIG_PATH` points at a file that does not exist, so a
//!   developer's saved host never leaks into a test.

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";
pub const TEST_SID: &str = "1700000000.42";

/// Config path that never exists.
pub fn missing_config_path() -> std::path::PathBuf {
    std::env::temp_dir()
        .join("splunk-search-cli-tests")
        .join("does-not-exist")
        .join("config.json")
}

/// Returns a hermetic `splunk` command for integration testing.
pub fn splunk_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("splunk");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SPLUNK_TOKEN", TEST_TOKEN);
    cmd.env("SPLUNK_CONFIG_PATH", missing_config_path());

    cmd.env_remove("SPLUNK_HOST")
        .env_remove("SPLUNK_PORT")
        .env_remove("SPLUNK_TIMEOUT")
        .env_remove("SPLUNK_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// `splunk_cmd()` pointed at a mock server.
pub fn splunk_cmd_for(server: &MockServer) -> Command {
    let mut cmd = splunk_cmd();
    cmd.env("SPLUNK_HOST", server.uri());
    cmd
}

pub fn job_created() -> Value {
    json!({ "sid": TEST_SID })
}

pub fn job_status(dispatch_state: &str, is_done: bool, result_count: u64) -> Value {
    json!({
        "entry": [{
            "content": {
                "sid": TEST_SID,
                "dispatchState": dispatch_state,
                "isDone": is_done,
                "doneProgress": if is_done { 1.0 } else { 0.4 },
                "eventCount": result_count,
                "resultCount": result_count
            }
        }]
    })
}

/// Mount a job that is accepted, reported running `running_ticks` times, then done.
pub async fn mount_search_job(
    server: &MockServer,
    running_ticks: u64,
    results: Value,
    result_count: u64,
) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(job_created()))
        .mount(server)
        .await;

    let status_path = format!("/services/search/jobs/{}", TEST_SID);
    if running_ticks > 0 {
        Mock::given(method("GET"))
            .and(path(status_path.as_str()))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(job_status("RUNNING", false, 0)),
            )
            .up_to_n_times(running_ticks)
            .mount(server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(status_path.as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(job_status("DONE", true, result_count)),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{}/results", TEST_SID).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(results))
        .mount(server)
        .await;
}
