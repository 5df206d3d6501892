//! Result retrieval for finished jobs.

use tracing::debug;

use super::api::JobApi;
use super::error::SearchError;
use crate::models::{JobHandle, ResultSet};

/// Fetch up to `max_count` rows of a finished job, in server order.
///
/// Failures are reported as `SearchError::Fetch`, distinct from status
/// failures, since the job itself did finish.
pub async fn fetch_results<A: JobApi>(
    api: &A,
    job: &JobHandle,
    max_count: i64,
) -> Result<ResultSet, SearchError> {
    let results = api
        .job_results(job, max_count)
        .await
        .map_err(SearchError::Fetch)?;
    debug!(sid = %job, rows = results.len(), "Fetched search results");
    Ok(results)
}
