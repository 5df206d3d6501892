//! Asynchronous search-job orchestration.
//!
//! Responsibilities:
//! - Normalize and submit a query (`submit`).
//! - Drive the completion poller (`poller`) until a terminal outcome.
//! - Fetch results once the job is done (`fetch`).
//!
//! Does NOT handle:
//! - Formatting results. Front ends consume the neutral `ResultSet`.
//! - Concurrent jobs. One invocation runs one job, strictly
//!   submit, then poll, then fetch.
//!
//! Both front ends run the same state machine; they differ only in the
//! `PollConfig` deadline and in what trips the `CancellationToken`.

mod api;
mod cancel;
mod error;
mod fetch;
mod observer;
mod poller;
mod query;
mod submit;

pub use api::JobApi;
pub use cancel::CancellationToken;
pub use error::SearchError;
pub use fetch::fetch_results;
pub use observer::SearchObserver;
pub use poller::{PollConfig, PollOutcome, poll_job};
pub use query::{SEARCH_KEYWORD, normalize_query};
pub use submit::{SearchRequest, submit};

use crate::models::{JobHandle, JobStatus, ResultSet};

/// A finished search.
#[derive(Debug, Clone)]
pub struct SearchCompletion {
    pub job: JobHandle,
    /// The final status snapshot (for the displayed result count).
    pub status: JobStatus,
    pub results: ResultSet,
}

/// Submit, poll and fetch one search.
pub async fn run_search<A, O>(
    api: &A,
    request: &SearchRequest,
    poll: &PollConfig,
    cancel: &CancellationToken,
    observer: &mut O,
) -> Result<SearchCompletion, SearchError>
where
    A: JobApi,
    O: SearchObserver + ?Sized,
{
    if cancel.is_cancelled() {
        return Err(SearchError::Cancelled);
    }

    let job = submit(api, request, observer).await?;
    let (status, results) = poll_job(api, &job, poll, request.max_results, cancel, observer)
        .await
        .into_result()?;

    Ok(SearchCompletion {
        job,
        status,
        results,
    })
}
