//! Search job operations.
//!
//! # What this module handles:
//! - Creating search jobs
//! - Getting job status
//! - Retrieving search results
//!
//! # What this module does NOT handle:
//! - Query normalization and polling (see [`crate::search`])
//! - Saved search management (see [`super::saved`])

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{encode_path_segment, extract_entry_content, read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::{JobHandle, JobStatus, ResultSet};
use crate::redact_query;

/// Create a new search job.
///
/// `query` is sent as-is; callers normalize it first. Blank time bounds are
/// skipped because Splunk answers them with a 400.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
    earliest_time: Option<&str>,
    latest_time: Option<&str>,
) -> Result<JobHandle> {
    debug!("Creating search job: {}", redact_query(query));

    let url = format!("{}/services/search/jobs", base_url);

    let mut form_data: Vec<(&str, String)> = vec![
        ("search", query.to_string()),
        ("output_mode", "json".to_string()),
    ];
    if let Some(earliest) = earliest_time.filter(|t| !t.trim().is_empty()) {
        form_data.push(("earliest_time", earliest.to_string()));
    }
    if let Some(latest) = latest_time.filter(|t| !t.trim().is_empty()) {
        form_data.push(("latest_time", latest.to_string()));
    }

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .form(&form_data);
    let response = send_request(builder, "/services/search/jobs", "POST").await?;
    let resp = read_json(response).await?;

    // Splunk can return either:
    // - `{ "sid": "<sid>" }`
    // - `{ "entry": [ { "content": { "sid": "<sid>" } } ] }`
    let sid = resp
        .get("sid")
        .and_then(|v| v.as_str())
        .or_else(|| {
            resp.get("entry")?
                .get(0)?
                .get("content")?
                .get("sid")?
                .as_str()
        })
        .filter(|sid| !sid.is_empty())
        .ok_or_else(|| ClientError::Decode("Missing sid in response".to_string()))?;

    Ok(JobHandle::new(sid))
}

/// Get the status of a search job.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    job: &JobHandle,
) -> Result<JobStatus> {
    debug!("Getting status for job: {}", job);

    let url = format!(
        "{}/services/search/jobs/{}",
        base_url,
        encode_path_segment(job.as_str())
    );

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&[("output_mode", "json")]);
    let response = send_request(builder, "/services/search/jobs/{sid}", "GET").await?;
    let resp = read_json(response).await?;

    let content = extract_entry_content(&resp)?;
    serde_json::from_value(content.clone())
        .map_err(|e| ClientError::Decode(format!("Failed to parse job status: {}", e)))
}

/// Get results from a finished search job.
///
/// `max_count <= 0` omits `count` so the server applies its default page size.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    job: &JobHandle,
    max_count: i64,
) -> Result<ResultSet> {
    debug!("Getting results for job: {}", job);

    let url = format!(
        "{}/services/search/jobs/{}/results",
        base_url,
        encode_path_segment(job.as_str())
    );

    let mut query_params: Vec<(&str, String)> = vec![("output_mode", "json".to_string())];
    if max_count > 0 {
        query_params.push(("count", max_count.to_string()));
    }

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&query_params);
    let response = send_request(builder, "/services/search/jobs/{sid}/results", "GET").await?;

    let body = response.text().await?;
    ResultSet::from_response_body(&body)
}
