//! MCP tool server over stdio.
//!
//! Responsibilities:
//! - Speak line-delimited JSON-RPC 2.0 on stdin/stdout (`server`).
//! - Expose the search lifecycle and the saved search, alert, server info
//!   and event operations as tools (`tools`).
//!
//! Does NOT handle:
//! - Resources, prompts or any transport other than stdio.
//!
//! Invariants:
//! - Domain failures are tool results with `isError: true`; only malformed
//!   requests produce JSON-RPC errors.
//! - Nothing but protocol messages is written to stdout.

mod protocol;
mod server;
mod tools;

use anyhow::Result;
use splunk_search_client::SplunkClient;
use tokio::io::BufReader;
use tracing::info;

use crate::cancellation::CancellationToken;

pub use server::serve;

/// Serve tool calls on the process stdin/stdout until EOF or cancellation.
pub async fn run_stdio(client: &SplunkClient, cancel: &CancellationToken) -> Result<()> {
    info!(base_url = client.base_url(), "Starting MCP server on stdio");

    let reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    serve(client, reader, &mut writer, cancel).await
}
