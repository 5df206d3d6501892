//! Text formatter implementation.
//!
//! Responsibilities:
//! - Render search results as numbered `Result N:` blocks of `  key: value` lines.
//! - Render saved search, alert and server info listings.
//!
//! Does NOT handle:
//! - Other output formats.
//!
//! Invariants:
//! - Every field of every row is printed, in server order.
//! - Text values print raw; other values print as compact JSON.

use std::fmt::Write;

use anyhow::Result;
use splunk_search_client::{Alert, ResultSet, SavedSearch, SearchCompletion, ServerInfo};

use crate::formatters::Formatter;

/// Text formatter.
pub struct TextFormatter;

/// Append one `Result N:` block per row, each followed by a blank line.
pub fn write_result_blocks(output: &mut String, results: &ResultSet) -> std::fmt::Result {
    for (i, row) in results.rows.iter().enumerate() {
        writeln!(output, "Result {}:", i + 1)?;
        for (key, value) in row.iter() {
            writeln!(output, "  {}: {}", key, value)?;
        }
        output.push('\n');
    }
    Ok(())
}

fn write_saved_entry(
    output: &mut String,
    name: &str,
    search: &str,
    description: Option<&str>,
    schedule: Option<&str>,
) -> std::fmt::Result {
    writeln!(output, "Name: {}", name)?;
    writeln!(output, "Search: {}", search)?;
    if let Some(description) = description {
        writeln!(output, "Description: {}", description)?;
    }
    if let Some(schedule) = schedule {
        writeln!(output, "Schedule: {}", schedule)?;
    }
    Ok(())
}

impl Formatter for TextFormatter {
    fn format_search_results(&self, completion: &SearchCompletion) -> Result<String> {
        let mut output = format!(
            "Search completed. Found {} results.\n\n",
            completion.status.result_count
        );
        write_result_blocks(&mut output, &completion.results)?;
        Ok(output)
    }

    fn format_saved_searches(&self, searches: &[SavedSearch]) -> Result<String> {
        if searches.is_empty() {
            return Ok("No saved searches found\n".to_string());
        }

        let mut output = format!("Found {} saved search(es):\n\n", searches.len());
        for search in searches {
            write_saved_entry(
                &mut output,
                &search.name,
                &search.search,
                search.description.as_deref(),
                search.cron_schedule.as_deref(),
            )?;
            output.push_str("---\n");
        }
        Ok(output)
    }

    fn format_alerts(&self, alerts: &[Alert]) -> Result<String> {
        if alerts.is_empty() {
            return Ok("No scheduled alerts found\n".to_string());
        }

        let mut output = format!("Found {} alert(s):\n\n", alerts.len());
        for alert in alerts {
            write_saved_entry(
                &mut output,
                &alert.name,
                &alert.search,
                alert.description.as_deref(),
                alert.cron_schedule.as_deref(),
            )?;
            if let Some(actions) = &alert.actions {
                writeln!(output, "Actions: {}", actions)?;
            }
            output.push_str("---\n");
        }
        Ok(output)
    }

    fn format_server_info(&self, info: &ServerInfo) -> Result<String> {
        let mut output = String::from("Splunk Server Information:\n");
        for (key, value) in info.entries() {
            writeln!(output, "  {}: {}", key, value)?;
        }
        Ok(output)
    }
}
