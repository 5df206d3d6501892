//! Saved search and scheduled alert operations.
//!
//! # What this module handles:
//! - Listing saved searches
//! - Creating a saved search
//! - Listing scheduled alerts (saved searches filtered by `is_scheduled=1`)

use reqwest::Client;
use tracing::debug;

use crate::endpoints::{read_json, send_request};
use crate::error::{ClientError, Result};
use crate::models::saved_searches::SavedSearchContent;
use crate::models::{Alert, SavedSearch, SavedSearchCreateParams, SplunkResponse};
use crate::redact_query;

const SAVED_SEARCHES_PATH: &str = "/services/saved/searches";

async fn fetch_saved_entries(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    filter: Option<&str>,
) -> Result<SplunkResponse<SavedSearchContent>> {
    let url = format!("{}{}", base_url, SAVED_SEARCHES_PATH);

    let mut query_params: Vec<(&str, &str)> = vec![("output_mode", "json"), ("count", "0")];
    if let Some(filter) = filter {
        query_params.push(("search", filter));
    }

    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .query(&query_params);
    let response = send_request(builder, SAVED_SEARCHES_PATH, "GET").await?;
    let resp = read_json(response).await?;

    serde_json::from_value(resp)
        .map_err(|e| ClientError::Decode(format!("Failed to parse saved searches: {}", e)))
}

/// List all saved searches.
pub async fn list_saved_searches(
    client: &Client,
    base_url: &str,
    auth_token: &str,
) -> Result<Vec<SavedSearch>> {
    debug!("Listing saved searches");

    let resp = fetch_saved_entries(client, base_url, auth_token, None).await?;
    Ok(resp
        .entry
        .into_iter()
        .map(|e| SavedSearch {
            name: e.name,
            search: e.content.search,
            description: e.content.description.filter(|d| !d.is_empty()),
            cron_schedule: e.content.cron_schedule.filter(|c| !c.is_empty()),
        })
        .collect())
}

/// List saved searches that run on a schedule.
pub async fn list_alerts(client: &Client, base_url: &str, auth_token: &str) -> Result<Vec<Alert>> {
    debug!("Listing scheduled alerts");

    let resp = fetch_saved_entries(client, base_url, auth_token, Some("is_scheduled=1")).await?;
    Ok(resp
        .entry
        .into_iter()
        .map(|e| Alert {
            name: e.name,
            search: e.content.search,
            description: e.content.description.filter(|d| !d.is_empty()),
            cron_schedule: e.content.cron_schedule.filter(|c| !c.is_empty()),
            actions: e.content.actions.filter(|a| !a.is_empty()),
        })
        .collect())
}

/// Create a saved search.
pub async fn create_saved_search(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    params: &SavedSearchCreateParams,
) -> Result<()> {
    debug!(
        "Creating saved search {}: {}",
        params.name,
        redact_query(&params.search)
    );

    if params.name.trim().is_empty() {
        return Err(ClientError::InvalidRequest(
            "saved search name must not be empty".to_string(),
        ));
    }

    let url = format!("{}{}", base_url, SAVED_SEARCHES_PATH);

    let mut form_data: Vec<(&str, String)> = vec![
        ("name", params.name.clone()),
        ("search", params.search.clone()),
        ("output_mode", "json".to_string()),
    ];
    if let Some(description) = params.description.as_deref().filter(|d| !d.is_empty()) {
        form_data.push(("description", description.to_string()));
    }

    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .form(&form_data);
    send_request(builder, SAVED_SEARCHES_PATH, "POST").await?;

    Ok(())
}
