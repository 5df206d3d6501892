//! `server-info` command.

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
    info!("Fetching server info");

    let server_info = tokio::select! {
        res = client.server_info() => res.context("Failed to get server info")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    if let Some(version) = server_info.version() {
        info!(version, "Connected");
    }

    let output = get_formatter(format).format_server_info(&server_info)?;
    print_output(&output)
}
