//! Saved search commands: list and create.

use anyhow::{Context, Result};
use splunk_search_client::{SavedSearchCreateParams, SplunkClient};
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::commands::print_output;
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run_list(
    client: &SplunkClient,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing saved searches");

    let searches = tokio::select! {
        res = client.list_saved_searches() => res.context("Failed to list saved searches")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let output = get_formatter(format).format_saved_searches(&searches)?;
    print_output(&output)
}

pub async fn run_create(
    client: &SplunkClient,
    name: &str,
    query: &str,
    description: Option<String>,
    cancel: &CancellationToken,
) -> Result<()> {
    info!(name, "Creating saved search");

    let params = SavedSearchCreateParams {
        name: name.to_string(),
        search: query.to_string(),
        description,
    };

    tokio::select! {
        res = client.create_saved_search(&params) => res.context("Failed to create saved search")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    print_output(&format!("Successfully created saved search: {}\n", name))
}
