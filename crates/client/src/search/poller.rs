//! Completion poller: the search job state machine.
//!
//! Responsibilities:
//! - Ask for job status on a fixed interval until the job is done, the
//!   deadline passes, a status request fails, or the caller cancels.
//! - Fetch results exactly once when the job reports done.
//!
//! Does NOT handle:
//! - Retries. A failed status request ends the loop.
//! - Rendering or progress output (see `SearchObserver`).
//!
//! Invariants:
//! - Status requests are strictly sequential; the first one is issued
//!   immediately, the next one `interval` after the previous answer.
//! - No request of any kind is issued after a terminal outcome.
//! - Cancellation is checked before each request, after each response and
//!   while waiting for the next tick; in-flight requests are not aborted.

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::api::JobApi;
use super::cancel::CancellationToken;
use super::error::SearchError;
use super::fetch::fetch_results;
use super::observer::SearchObserver;
use crate::models::{JobHandle, JobStatus, ResultSet};
use splunk_search_config::constants::{DEFAULT_POLL_INTERVAL_MS, TOOL_CALL_SEARCH_DEADLINE_SECS};

/// Tick interval and overall deadline of one poll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    pub interval: Duration,
    /// `None` polls until done or cancelled.
    pub deadline: Option<Duration>,
}

impl PollConfig {
    /// No deadline; used by the command line, where Ctrl+C is the way out.
    pub fn unbounded() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            deadline: None,
        }
    }

    /// Give up once `deadline` has elapsed.
    pub fn bounded(deadline: Duration) -> Self {
        Self {
            deadline: Some(deadline),
            ..Self::unbounded()
        }
    }

    /// The 60 second budget of the tool-call server.
    pub fn tool_call() -> Self {
        Self::bounded(Duration::from_secs(TOOL_CALL_SEARCH_DEADLINE_SECS))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Terminal state of the poll loop.
#[derive(Debug)]
pub enum PollOutcome {
    Completed {
        /// The snapshot that reported done; its result count is for display only.
        status: JobStatus,
        results: ResultSet,
    },
    TimedOut {
        deadline: Duration,
    },
    Failed(SearchError),
    Cancelled,
}

impl PollOutcome {
    pub fn into_result(self) -> Result<(JobStatus, ResultSet), SearchError> {
        match self {
            Self::Completed { status, results } => Ok((status, results)),
            Self::TimedOut { deadline } => Err(SearchError::TimedOut(deadline)),
            Self::Failed(e) => Err(e),
            Self::Cancelled => Err(SearchError::Cancelled),
        }
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}

/// Poll `job` until it reaches a terminal state.
pub async fn poll_job<A, O>(
    api: &A,
    job: &JobHandle,
    config: &PollConfig,
    max_results: i64,
    cancel: &CancellationToken,
    observer: &mut O,
) -> PollOutcome
where
    A: JobApi,
    O: SearchObserver + ?Sized,
{
    let started = Instant::now();
    let deadline_at = config.deadline.map(|d| started + d);
    let mut tick: u64 = 0;

    let timed_out = |limit: Duration| {
        info!(sid = %job, deadline_secs = limit.as_secs(), "Search timed out");
        PollOutcome::TimedOut { deadline: limit }
    };

    loop {
        if cancel.is_cancelled() {
            info!(sid = %job, "Search cancelled");
            return PollOutcome::Cancelled;
        }
        if let (Some(limit), Some(at)) = (config.deadline, deadline_at)
            && Instant::now() >= at
        {
            return timed_out(limit);
        }

        tick += 1;
        let status = match api.job_status(job).await {
            Ok(status) => status,
            Err(e) => {
                warn!(sid = %job, tick, error = %e, "Status request failed");
                return PollOutcome::Failed(SearchError::Status(e));
            }
        };

        if cancel.is_cancelled() {
            info!(sid = %job, "Search cancelled");
            return PollOutcome::Cancelled;
        }

        debug!(
            sid = %job,
            tick,
            state = %status.dispatch_state,
            done = status.is_done,
            "Polled job status"
        );
        observer.on_status(&status);

        if status.is_done {
            info!(
                sid = %job,
                ticks = tick,
                result_count = status.result_count,
                "Search job done"
            );
            return match fetch_results(api, job, max_results).await {
                Ok(results) => PollOutcome::Completed { status, results },
                Err(e) => PollOutcome::Failed(e),
            };
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!(sid = %job, "Search cancelled");
                return PollOutcome::Cancelled;
            }
            _ = sleep_until_deadline(deadline_at) => {
                if let Some(limit) = config.deadline {
                    return timed_out(limit);
                }
            }
            _ = tokio::time::sleep(config.interval) => {}
        }
    }
}
