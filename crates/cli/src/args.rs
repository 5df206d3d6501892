//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve credentials (see `splunk_search_config::CredentialChain`).

use clap::{Parser, Subcommand};
use splunk_search_config::constants::DEFAULT_MAX_RESULTS;
use std::path::PathBuf;

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "splunk")]
#[command(about = "Run Splunk searches and manage saved searches from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  splunk configure splunk.example.com\n  splunk search 'index=_internal error' -24h now\n  splunk search '| stats count by host' --count 10\n  splunk --output json list-alerts\n  splunk mcp-server\n"
)]
pub struct Cli {
    /// Splunk host name or full https:// URL of the management port
    /// (falls back to the config file, then SPLUNK_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// API token for bearer authentication (falls back to SPLUNK_TOKEN, then the keyring)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Path to a custom configuration file (overrides default location).
    #[arg(long, global = true, env = "SPLUNK_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format for command results
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configure Splunk host and token (reads token from stdin)
    Configure {
        /// Host name of the Splunk instance
        host: String,
    },

    /// Run a Splunk search query and wait for the results
    Search {
        /// The search query (a leading 'search' is added when missing)
        query: String,

        /// Earliest time for the search (e.g., '-24h', '2024-01-01T00:00:00')
        #[arg(allow_hyphen_values = true)]
        earliest: Option<String>,

        /// Latest time for the search (e.g., 'now', '2024-01-02T00:00:00')
        #[arg(allow_hyphen_values = true)]
        latest: Option<String>,

        /// Maximum number of results to fetch (0 lets the server decide)
        #[arg(short, long, default_value_t = DEFAULT_MAX_RESULTS as i64)]
        count: i64,
    },

    /// List all saved searches
    ListSavedSearches,

    /// Create a saved search
    CreateSavedSearch {
        /// Name of the saved search
        name: String,

        /// SPL search query
        query: String,

        /// Optional description of the saved search
        description: Option<String>,
    },

    /// List scheduled alerts
    ListAlerts,

    /// Get Splunk server information
    ServerInfo,

    /// Send an event to Splunk
    SendEvent {
        /// Target index for the event
        index: String,

        /// Source field for the event (empty for the server default)
        source: String,

        /// Sourcetype field for the event (empty for the server default)
        sourcetype: String,

        /// Event data as a JSON object
        event: String,
    },

    /// Start the MCP tool server (JSON-RPC over stdio)
    McpServer,
}

impl Commands {
    /// Commands that talk to Splunk and therefore need a resolved configuration.
    pub fn needs_connection(&self) -> bool {
        !matches!(self, Commands::Configure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_positional_time_range() {
        let cli = Cli::try_parse_from(["splunk", "search", "error", "-24h", "now"]).unwrap();
        match cli.command {
            Commands::Search {
                query,
                earliest,
                latest,
                count,
            } => {
                assert_eq!(query, "error");
                assert_eq!(earliest.as_deref(), Some("-24h"));
                assert_eq!(latest.as_deref(), Some("now"));
                assert_eq!(count, 100);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_global_output_after_subcommand() {
        let cli = Cli::try_parse_from(["splunk", "list-alerts", "--output", "json"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::ListAlerts));
    }

    #[test]
    fn test_send_event_requires_all_positionals() {
        assert!(Cli::try_parse_from(["splunk", "send-event", "main", "src", "st"]).is_err());
        assert!(
            Cli::try_parse_from(["splunk", "send-event", "main", "", "", r#"{"a":1}"#]).is_ok()
        );
    }

    #[test]
    fn test_configure_needs_no_connection() {
        let cli = Cli::try_parse_from(["splunk", "configure", "h"]).unwrap();
        assert!(!cli.command.needs_connection());
        let cli = Cli::try_parse_from(["splunk", "server-info"]).unwrap();
        assert!(cli.command.needs_connection());
    }
}
