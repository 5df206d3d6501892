//! Search job models.
//!
//! # What this module handles:
//! - The job handle returned on submission
//! - The per-tick status snapshot
//!
//! # What this module does NOT handle:
//! - Result rows (see [`super::results`])
//! - Polling (see [`crate::search`])

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque search job identifier (Splunk `sid`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobHandle(String);

impl JobHandle {
    pub fn new(sid: impl Into<String>) -> Self {
        Self(sid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for JobHandle {
    fn from(sid: String) -> Self {
        Self(sid)
    }
}

impl From<&str> for JobHandle {
    fn from(sid: &str) -> Self {
        Self(sid.to_string())
    }
}

/// Snapshot of a job's progress, produced once per poll tick.
///
/// Only the latest snapshot matters; the poller never keeps older ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(
        rename = "isDone",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_flag"
    )]
    pub is_done: bool,
    #[serde(
        rename = "resultCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub result_count: usize,
    #[serde(
        rename = "eventCount",
        default,
        deserialize_with = "crate::serde_helpers::usize_from_string_or_number"
    )]
    pub event_count: usize,
    /// Remote execution phase label (`QUEUED`, `PARSING`, `RUNNING`, `DONE`, `FAILED`...).
    #[serde(rename = "dispatchState", default)]
    pub dispatch_state: String,
    #[serde(
        rename = "doneProgress",
        default,
        deserialize_with = "crate::serde_helpers::f64_from_string_or_number"
    )]
    pub done_progress: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_from_splunk_content() {
        let json = r#"{
            "isDone": true,
            "resultCount": 3,
            "eventCount": "42",
            "dispatchState": "DONE",
            "doneProgress": 1.0,
            "sid": "ignored"
        }"#;
        let status: JobStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_done);
        assert_eq!(status.result_count, 3);
        assert_eq!(status.event_count, 42);
        assert_eq!(status.dispatch_state, "DONE");
        assert_eq!(status.done_progress, 1.0);
    }

    #[test]
    fn test_job_status_defaults_for_missing_fields() {
        let status: JobStatus = serde_json::from_str(r#"{"dispatchState":"QUEUED"}"#).unwrap();
        assert!(!status.is_done);
        assert_eq!(status.result_count, 0);
        assert_eq!(status.dispatch_state, "QUEUED");
    }

    #[test]
    fn test_job_handle_display() {
        let handle = JobHandle::from("1700000000.42");
        assert_eq!(handle.to_string(), "1700000000.42");
        assert_eq!(handle.as_str(), "1700000000.42");
    }
}
