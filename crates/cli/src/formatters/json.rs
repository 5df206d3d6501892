//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use serde_json::json;
use splunk_search_client::{Alert, SavedSearch, SearchCompletion, ServerInfo};

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_search_results(&self, completion: &SearchCompletion) -> Result<String> {
        let value = json!({
            "sid": completion.job,
            "result_count": completion.status.result_count,
            "results": completion.results.rows,
        });
        Ok(format!("{}\n", serde_json::to_string_pretty(&value)?))
    }

    fn format_saved_searches(&self, searches: &[SavedSearch]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(searches)?))
    }

    fn format_alerts(&self, alerts: &[Alert]) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(alerts)?))
    }

    fn format_server_info(&self, info: &ServerInfo) -> Result<String> {
        Ok(format!("{}\n", serde_json::to_string_pretty(info)?))
    }
}
