//! Job submission.

use tracing::info;

use super::api::JobApi;
use super::error::SearchError;
use super::observer::SearchObserver;
use super::query::normalize_query;
use crate::models::JobHandle;
use crate::redact_query;

/// Parameters of one search invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Query as typed by the user; normalized on submission.
    pub query: String,
    /// Passed through to the server unvalidated.
    pub earliest_time: Option<String>,
    /// Passed through to the server unvalidated.
    pub latest_time: Option<String>,
    /// Row cap for the fetch; `<= 0` lets the server apply its default.
    pub max_results: i64,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_time_range(mut self, earliest: Option<String>, latest: Option<String>) -> Self {
        self.earliest_time = earliest;
        self.latest_time = latest;
        self
    }

    pub fn with_max_results(mut self, max_results: i64) -> Self {
        self.max_results = max_results;
        self
    }
}

/// Normalize the query and create the job. Issues exactly one request.
pub async fn submit<A, O>(
    api: &A,
    request: &SearchRequest,
    observer: &mut O,
) -> Result<JobHandle, SearchError>
where
    A: JobApi,
    O: SearchObserver + ?Sized,
{
    let query = normalize_query(&request.query)?;
    observer.on_submit(&query);

    let job = api
        .create_job(
            &query,
            request.earliest_time.as_deref(),
            request.latest_time.as_deref(),
        )
        .await
        .map_err(SearchError::Submit)?;

    info!(sid = %job, query = %redact_query(&query), "Search job created");
    observer.on_job_created(&job);
    Ok(job)
}
