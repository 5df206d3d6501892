//! Testing utilities for Splunk client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! - [`load_fixture`] loads canned Splunk JSON responses from `fixtures/`.
//! - [`ScriptedJobApi`] is an in-memory [`JobApi`] that replays a status
//!   script and records every call with its (tokio) timestamp, so the
//!   poller can be tested under paused time.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use tokio::time::Instant;

use crate::error::{ClientError, Result};
use crate::models::{JobHandle, JobStatus, ResultSet};
use crate::search::JobApi;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A status snapshot for a running job.
pub fn running_status(state: &str) -> JobStatus {
    JobStatus {
        is_done: false,
        dispatch_state: state.to_string(),
        ..JobStatus::default()
    }
}

/// A status snapshot for a finished job.
pub fn done_status(result_count: usize) -> JobStatus {
    JobStatus {
        is_done: true,
        result_count,
        event_count: result_count,
        dispatch_state: "DONE".to_string(),
        done_progress: 1.0,
    }
}

/// One recorded call against [`ScriptedJobApi`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    CreateJob {
        query: String,
        earliest_time: Option<String>,
        latest_time: Option<String>,
    },
    JobStatus {
        job: JobHandle,
    },
    JobResults {
        job: JobHandle,
        max_count: i64,
    },
}

/// Scripted in-memory job API.
///
/// Status answers are replayed in order; once the script is exhausted every
/// further status request reports a running job.
pub struct ScriptedJobApi {
    sid: String,
    submit_error: Mutex<Option<ClientError>>,
    statuses: Mutex<VecDeque<Result<JobStatus>>>,
    results: Mutex<Option<Result<ResultSet>>>,
    calls: Mutex<Vec<(Instant, ApiCall)>>,
}

impl ScriptedJobApi {
    pub fn new(sid: &str) -> Self {
        Self {
            sid: sid.to_string(),
            submit_error: Mutex::new(None),
            statuses: Mutex::new(VecDeque::new()),
            results: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn then_status(self, status: JobStatus) -> Self {
        self.statuses.lock().unwrap().push_back(Ok(status));
        self
    }

    pub fn then_status_error(self, error: ClientError) -> Self {
        self.statuses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn with_results(self, results: ResultSet) -> Self {
        *self.results.lock().unwrap() = Some(Ok(results));
        self
    }

    pub fn with_fetch_error(self, error: ClientError) -> Self {
        *self.results.lock().unwrap() = Some(Err(error));
        self
    }

    pub fn with_submit_error(self, error: ClientError) -> Self {
        *self.submit_error.lock().unwrap() = Some(error);
        self
    }

    /// Every recorded call, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, c)| c.clone())
            .collect()
    }

    /// Times at which status requests were issued.
    pub fn status_times(&self) -> Vec<Instant> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, c)| matches!(c, ApiCall::JobStatus { .. }))
            .map(|(at, _)| *at)
            .collect()
    }

    pub fn status_call_count(&self) -> usize {
        self.status_times().len()
    }

    pub fn fetch_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, ApiCall::JobResults { .. }))
            .count()
    }

    /// Queries received by `create_job`.
    pub fn submitted_queries(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ApiCall::CreateJob { query, .. } => Some(query),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push((Instant::now(), call));
    }
}

impl JobApi for ScriptedJobApi {
    async fn create_job(
        &self,
        query: &str,
        earliest_time: Option<&str>,
        latest_time: Option<&str>,
    ) -> Result<JobHandle> {
        self.record(ApiCall::CreateJob {
            query: query.to_string(),
            earliest_time: earliest_time.map(str::to_string),
            latest_time: latest_time.map(str::to_string),
        });
        match self.submit_error.lock().unwrap().take() {
            Some(e) => Err(e),
            None => Ok(JobHandle::new(self.sid.clone())),
        }
    }

    async fn job_status(&self, job: &JobHandle) -> Result<JobStatus> {
        self.record(ApiCall::JobStatus { job: job.clone() });
        let next = self.statuses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(running_status("RUNNING")))
    }

    async fn job_results(&self, job: &JobHandle, max_count: i64) -> Result<ResultSet> {
        self.record(ApiCall::JobResults {
            job: job.clone(),
            max_count,
        });
        let scripted = self.results.lock().unwrap().take();
        scripted.unwrap_or_else(|| Ok(ResultSet::default()))
    }
}
