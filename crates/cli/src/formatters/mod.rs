//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the two output formats: human-readable text and JSON.
//! - Implement the `Formatter` trait for every resource the CLI prints.
//! - Share the text rendering of rows and lists with the MCP tool server.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Progress lines (the search command writes those to stderr itself).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior | Example |
//! |--------|---------------------|---------|
//! | JSON | Valid empty structure | `[]` |
//! | Text | Human message | `No saved searches found` |

use anyhow::Result;
use clap::ValueEnum;
use splunk_search_client::{Alert, SavedSearch, SearchCompletion, ServerInfo};

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{TextFormatter, write_result_blocks};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Formatter trait for the resources the CLI prints.
pub trait Formatter {
    /// Format a completed search: the summary line and every row.
    fn format_search_results(&self, completion: &SearchCompletion) -> Result<String>;

    /// Format the saved search list.
    fn format_saved_searches(&self, searches: &[SavedSearch]) -> Result<String>;

    /// Format the scheduled alert list.
    fn format_alerts(&self, alerts: &[Alert]) -> Result<String>;

    /// Format server information.
    fn format_server_info(&self, info: &ServerInfo) -> Result<String>;
}

/// Get a formatter for the specified output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
