//! The three remote calls the search lifecycle depends on.
//!
//! `SplunkClient` implements this over HTTP; tests substitute a scripted
//! fake so the poller can be driven tick by tick under paused time.

use std::future::Future;

use crate::error::Result;
use crate::models::{JobHandle, JobStatus, ResultSet};

/// Remote job operations used by the submitter, poller and fetcher.
pub trait JobApi: Send + Sync {
    /// Create a job for an already-normalized query. Exactly one request.
    fn create_job(
        &self,
        query: &str,
        earliest_time: Option<&str>,
        latest_time: Option<&str>,
    ) -> impl Future<Output = Result<JobHandle>> + Send;

    /// Fetch one status snapshot. Exactly one request.
    fn job_status(&self, job: &JobHandle) -> impl Future<Output = Result<JobStatus>> + Send;

    /// Fetch up to `max_count` rows (`<= 0` lets the server pick). Exactly one request.
    fn job_results(
        &self,
        job: &JobHandle,
        max_count: i64,
    ) -> impl Future<Output = Result<ResultSet>> + Send;
}
