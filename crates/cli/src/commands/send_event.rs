//! `send-event` command: post one JSON event to the simple receiver.
//!
//! Invariants:
//! - The event body must be a JSON object; it is validated before any request.
//! - Empty source and sourcetype are left to the server defaults.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use splunk_search_client::{EventPayload, SplunkClient};
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::commands::print_output;

/// Parse the event argument into a JSON object.
pub(crate) fn parse_event(raw: &str) -> Result<Map<String, Value>> {
    EventPayload::parse_event(raw).context("Failed to parse event JSON")
}

pub async fn run(
    client: &SplunkClient,
    index: &str,
    source: &str,
    sourcetype: &str,
    event: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let event = parse_event(event)?;
    let payload = EventPayload::new(event, index, source, sourcetype);

    info!(index, "Sending event");

    tokio::select! {
        res = client.send_event(&payload) => res.context("Failed to send event")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    print_output(&format!("Successfully sent event to index: {}\n", index))
}
