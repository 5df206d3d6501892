//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;
use std::time::Duration;

#[allow(unused_imports)]
pub use splunk_search_client::testing::{
    ApiCall, ScriptedJobApi, done_status, load_fixture, running_status,
};

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use splunk_search_client::endpoints;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_TOKEN: &str = "test-token";

/// A client pointed at a mock server.
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> splunk_search_client::SplunkClient {
    splunk_search_client::SplunkClient::builder()
        .base_url(server.uri())
        .token(SecretString::new(TEST_TOKEN.to_string().into()))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}

/// Advance Tokio's paused clock and yield so sleepers can observe the change.
#[allow(dead_code)]
pub async fn advance_and_yield(duration: Duration) {
    tokio::time::advance(duration).await;
    tokio::task::yield_now().await;
}
