//! Search-related endpoints: jobs and saved searches.

mod jobs;
mod saved;

pub use jobs::{create_job, get_job_status, get_results};
pub use saved::{create_saved_search, list_alerts, list_saved_searches};
