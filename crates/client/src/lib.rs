//! Splunk REST API client and search-job orchestration.
//!
//! This crate provides a typed client for the Splunk management API
//! (bearer token authentication), the search lifecycle shared by the
//! command line and the tool-call server (submit, poll, fetch), and a
//! front-end neutral result model.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod redact;
pub mod search;
mod serde_helpers;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    Alert, EventPayload, FieldValue, JobHandle, JobStatus, ResultRow, ResultSet,
    SavedSearch, SavedSearchCreateParams, Scalar, ServerInfo,
};
pub use redact::redact_query;
pub use search::{
    CancellationToken, JobApi, PollConfig, PollOutcome, SearchCompletion, SearchError,
    SearchObserver, SearchRequest, run_search,
};
