//! Search job methods for [`SplunkClient`].

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{JobHandle, JobStatus, ResultSet};
use crate::search::JobApi;

impl SplunkClient {
    /// Create a search job for an already-normalized query.
    pub async fn create_search_job(
        &self,
        query: &str,
        earliest_time: Option<&str>,
        latest_time: Option<&str>,
    ) -> Result<JobHandle> {
        endpoints::create_job(
            &self.http,
            &self.base_url,
            self.auth_token(),
            query,
            earliest_time,
            latest_time,
        )
        .await
    }

    /// Get the current status of a search job.
    pub async fn get_job_status(&self, job: &JobHandle) -> Result<JobStatus> {
        endpoints::get_job_status(&self.http, &self.base_url, self.auth_token(), job).await
    }

    /// Fetch results of a finished job (`max_count <= 0` uses the server default).
    pub async fn get_search_results(&self, job: &JobHandle, max_count: i64) -> Result<ResultSet> {
        endpoints::get_results(&self.http, &self.base_url, self.auth_token(), job, max_count).await
    }
}

impl JobApi for SplunkClient {
    async fn create_job(
        &self,
        query: &str,
        earliest_time: Option<&str>,
        latest_time: Option<&str>,
    ) -> Result<JobHandle> {
        self.create_search_job(query, earliest_time, latest_time)
            .await
    }

    async fn job_status(&self, job: &JobHandle) -> Result<JobStatus> {
        self.get_job_status(job).await
    }

    async fn job_results(&self, job: &JobHandle, max_count: i64) -> Result<ResultSet> {
        self.get_search_results(job, max_count).await
    }
}
