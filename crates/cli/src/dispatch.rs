//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//! - Build the shared `SplunkClient` for commands that talk to Splunk.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - All commands receive the same cancellation token.
//! - `configure` is the only command that runs without a resolved `Config`.

use anyhow::{Context, Result};
use splunk_search_client::SplunkClient;
use splunk_search_config::Config;
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::mcp;

/// Build the client from the resolved configuration.
fn connect(config: Option<Config>) -> Result<SplunkClient> {
    let config = config.context("configuration was not resolved")?;
    let client = SplunkClient::from_config(&config)?;
    debug!(base_url = client.base_url(), "Client ready");
    Ok(client)
}

/// Dispatch CLI commands to their respective handlers.
///
/// `config` is `None` only for commands where `needs_connection()` is false.
pub(crate) async fn run_command(
    cli: Cli,
    config: Option<Config>,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = cli.output;

    match cli.command {
        Commands::Configure { host } => commands::configure::run(&host, cli.config_path),
        Commands::Search {
            query,
            earliest,
            latest,
            count,
        } => {
            let client = connect(config)?;
            commands::search::run(&client, &query, earliest, latest, count, format, cancel).await
        }
        Commands::ListSavedSearches => {
            let client = connect(config)?;
            commands::saved_searches::run_list(&client, format, cancel).await
        }
        Commands::CreateSavedSearch {
            name,
            query,
            description,
        } => {
            let client = connect(config)?;
            commands::saved_searches::run_create(&client, &name, &query, description, cancel).await
        }
        Commands::ListAlerts => {
            let client = connect(config)?;
            commands::alerts::run(&client, format, cancel).await
        }
        Commands::ServerInfo => {
            let client = connect(config)?;
            commands::server_info::run(&client, format, cancel).await
        }
        Commands::SendEvent {
            index,
            source,
            sourcetype,
            event,
        } => {
            let client = connect(config)?;
            commands::send_event::run(&client, &index, &source, &sourcetype, &event, cancel).await
        }
        Commands::McpServer => {
            let client = connect(config)?;
            mcp::run_stdio(&client, cancel).await
        }
    }
}
