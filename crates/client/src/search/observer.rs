//! Lifecycle hooks for front ends that report progress.

use crate::models::{JobHandle, JobStatus};

/// Receives lifecycle events while a search runs.
///
/// All methods default to no-ops; `()` is the silent observer.
pub trait SearchObserver: Send {
    /// Called with the normalized query right before submission.
    fn on_submit(&mut self, _query: &str) {}

    /// Called once the server has accepted the job.
    fn on_job_created(&mut self, _job: &JobHandle) {}

    /// Called with every status snapshot, including the final one.
    fn on_status(&mut self, _status: &JobStatus) {}
}

impl SearchObserver for () {}
