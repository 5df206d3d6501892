//! `list-alerts` command: saved searches that run on a schedule.

use anyhow::{Context, Result};
use splunk_search_client::SplunkClient;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::commands::print_output;
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(
    client: &SplunkClient,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Listing scheduled alerts");

    let alerts = tokio::select! {
        res = client.list_alerts() => res.context("Failed to list alerts")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    let output = get_formatter(format).format_alerts(&alerts)?;
    print_output(&output)
}
