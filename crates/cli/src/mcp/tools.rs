//! Tool catalogue and handlers for the MCP server.
//!
//! Responsibilities:
//! - Describe each tool with a JSON input schema (`definitions`).
//! - Validate tool arguments and run the matching Splunk operation.
//! - Render outcomes as text, reusing the CLI text formatter.
//!
//! Invariants:
//! - The `search` tool waits at most 60 seconds for the job to finish.
//! - Every handler returns a `ToolResult`; failures set `is_error`.

use std::future::Future;

use serde_json::{Map, Value, json};
use splunk_search_client::{
    ClientError, EventPayload, JobApi, PollConfig, SavedSearchCreateParams, SearchCompletion, SearchRequest,
    SplunkClient, run_search,
};
use splunk_search_config::constants::DEFAULT_MAX_RESULTS;
use thiserror::Error;
use tracing::{info, warn};

use super::protocol::ToolResult;
use crate::cancellation::CancellationToken;
use crate::formatters::{Formatter, TextFormatter, write_result_blocks};

/// A tool argument that is absent or has the wrong JSON type.
#[derive(Debug, Error, PartialEq)]
pub enum ToolArgError {
    #[error("required argument \"{0}\" not found")]
    Missing(&'static str),
    #[error("argument \"{0}\" is not a string")]
    NotString(&'static str),
}

/// `tools/call` named a tool this server does not provide.
#[derive(Debug, Error)]
#[error("unknown tool: {0}")]
pub struct UnknownTool(pub String);

fn require_string<'a>(args: &'a Map<String, Value>, key: &'static str) -> Result<&'a str, ToolArgError> {
    match args.get(key) {
        None | Some(Value::Null) => Err(ToolArgError::Missing(key)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(ToolArgError::NotString(key)),
    }
}

/// Optional string argument; missing or non-string values read as empty.
fn optional_string<'a>(args: &'a Map<String, Value>, key: &str) -> &'a str {
    args.get(key).and_then(Value::as_str).unwrap_or("")
}

fn non_empty(value: &str) -> Option<String> {
    (!value.trim().is_empty()).then(|| value.to_string())
}

/// `max_results` as an integer; anything unusable falls back to the default.
fn max_results(args: &Map<String, Value>) -> i64 {
    let default = DEFAULT_MAX_RESULTS as i64;
    match args.get("max_results") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(default),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
        _ => default,
    }
}

fn missing_argument(key: &str, err: ToolArgError) -> ToolResult {
    ToolResult::error(format!("Missing or invalid '{}' argument: {}", key, err))
}

async fn until_cancelled<F: Future>(cancel: &CancellationToken, fut: F) -> Option<F::Output> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => None,
        out = fut => Some(out),
    }
}

fn cancelled() -> ToolResult {
    ToolResult::error("Operation cancelled")
}

/// Tool descriptions returned by `tools/list`.
pub fn definitions() -> Vec<Value> {
    vec![
        json!({
            "name": "search",
            "description": "Run a Splunk search query and return results",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "SPL (Search Processing Language) query to execute"
                    },
                    "earliest_time": {
                        "type": "string",
                        "description": "Earliest time for search (e.g., '-1h', '-24h', '2024-01-01T00:00:00')"
                    },
                    "latest_time": {
                        "type": "string",
                        "description": "Latest time for search (e.g., 'now', '2024-01-01T23:59:59')"
                    },
                    "max_results": {
                        "type": "number",
                        "description": "Maximum number of results to return (default: 100)"
                    }
                },
                "required": ["query"]
            }
        }),
        json!({
            "name": "list_saved_searches",
            "description": "List all saved searches in Splunk",
            "inputSchema": {"type": "object", "properties": {}}
        }),
        json!({
            "name": "create_saved_search",
            "description": "Create a new saved search in Splunk",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Name of the saved search"},
                    "query": {"type": "string", "description": "SPL search query"},
                    "description": {
                        "type": "string",
                        "description": "Optional description of the saved search"
                    }
                },
                "required": ["name", "query"]
            }
        }),
        json!({
            "name": "list_alerts",
            "description": "List all scheduled alerts in Splunk",
            "inputSchema": {"type": "object", "properties": {}}
        }),
        json!({
            "name": "server_info",
            "description": "Get Splunk server information including version, OS, and configuration",
            "inputSchema": {"type": "object", "properties": {}}
        }),
        json!({
            "name": "send_event",
            "description": "Send an event to Splunk via HTTP Event Collector",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "index": {"type": "string", "description": "Target index for the event"},
                    "source": {"type": "string", "description": "Source field for the event"},
                    "sourcetype": {"type": "string", "description": "Sourcetype field for the event"},
                    "event": {"type": "string", "description": "Event data as JSON string"}
                },
                "required": ["index", "event"]
            }
        }),
    ]
}

/// Run the named tool against Splunk.
pub async fn call_tool(
    client: &SplunkClient,
    name: &str,
    args: &Map<String, Value>,
    cancel: &CancellationToken,
) -> Result<ToolResult, UnknownTool> {
    info!(tool = name, "Tool call");

    let result = match name {
        "search" => search(client, args, &PollConfig::tool_call(), cancel).await,
        "list_saved_searches" => list_saved_searches(client, cancel).await,
        "create_saved_search" => create_saved_search(client, args, cancel).await,
        "list_alerts" => list_alerts(client, cancel).await,
        "server_info" => server_info(client, cancel).await,
        "send_event" => send_event(client, args, cancel).await,
        other => return Err(UnknownTool(other.to_string())),
    };

    if result.is_error {
        warn!(tool = name, "Tool call failed");
    }
    Ok(result)
}

fn render_search(completion: &SearchCompletion) -> String {
    let mut text = format!(
        "Search completed. Found {} result(s).\n\n",
        completion.status.result_count
    );
    // Writing into a String cannot fail
    let _ = write_result_blocks(&mut text, &completion.results);
    text
}

/// The `search` tool: submit, poll under `poll`, then fetch.
pub async fn search<A: JobApi>(
    api: &A,
    args: &Map<String, Value>,
    poll: &PollConfig,
    cancel: &CancellationToken,
) -> ToolResult {
    let query = match require_string(args, "query") {
        Ok(query) => query,
        Err(e) => return missing_argument("query", e),
    };

    let request = SearchRequest::new(query)
        .with_time_range(
            non_empty(optional_string(args, "earliest_time")),
            non_empty(optional_string(args, "latest_time")),
        )
        .with_max_results(max_results(args));

    match run_search(api, &request, poll, cancel, &mut ()).await {
        Ok(completion) => ToolResult::text(render_search(&completion)),
        Err(e) => failure(e),
    }
}

/// Render an error and its sources on one line, as the CLI does.
fn failure(err: impl Into<anyhow::Error>) -> ToolResult {
    ToolResult::error(format!("{:#}", err.into()))
}

fn failed(context: &'static str, err: ClientError) -> ToolResult {
    failure(anyhow::Error::new(err).context(context))
}

fn formatted(output: anyhow::Result<String>) -> ToolResult {
    match output {
        Ok(text) => ToolResult::text(text),
        Err(e) => failure(e),
    }
}

async fn list_saved_searches(client: &SplunkClient, cancel: &CancellationToken) -> ToolResult {
    match until_cancelled(cancel, client.list_saved_searches()).await {
        None => cancelled(),
        Some(Err(e)) => failed("Failed to list saved searches", e),
        Some(Ok(searches)) => formatted(TextFormatter.format_saved_searches(&searches)),
    }
}

async fn create_saved_search(
    client: &SplunkClient,
    args: &Map<String, Value>,
    cancel: &CancellationToken,
) -> ToolResult {
    let name = match require_string(args, "name") {
        Ok(name) => name,
        Err(e) => return missing_argument("name", e),
    };
    let query = match require_string(args, "query") {
        Ok(query) => query,
        Err(e) => return missing_argument("query", e),
    };

    let params = SavedSearchCreateParams {
        name: name.to_string(),
        search: query.to_string(),
        description: non_empty(optional_string(args, "description")),
    };

    match until_cancelled(cancel, client.create_saved_search(&params)).await {
        None => cancelled(),
        Some(Err(e)) => failed("Failed to create saved search", e),
        Some(Ok(())) => ToolResult::text(format!("Successfully created saved search: {}", name)),
    }
}

async fn list_alerts(client: &SplunkClient, cancel: &CancellationToken) -> ToolResult {
    match until_cancelled(cancel, client.list_alerts()).await {
        None => cancelled(),
        Some(Err(e)) => failed("Failed to list alerts", e),
        Some(Ok(alerts)) => formatted(TextFormatter.format_alerts(&alerts)),
    }
}

async fn server_info(client: &SplunkClient, cancel: &CancellationToken) -> ToolResult {
    match until_cancelled(cancel, client.server_info()).await {
        None => cancelled(),
        Some(Err(e)) => failed("Failed to get server info", e),
        Some(Ok(info)) => formatted(TextFormatter.format_server_info(&info)),
    }
}

async fn send_event(
    client: &SplunkClient,
    args: &Map<String, Value>,
    cancel: &CancellationToken,
) -> ToolResult {
    let index = match require_string(args, "index") {
        Ok(index) => index,
        Err(e) => return missing_argument("index", e),
    };
    let raw_event = match require_string(args, "event") {
        Ok(event) => event,
        Err(e) => return missing_argument("event", e),
    };
    let event = match EventPayload::parse_event(raw_event) {
        Ok(event) => event,
        Err(e) => return ToolResult::error(format!("Failed to parse event JSON: {}", e)),
    };

    let payload = EventPayload::new(
        event,
        index,
        optional_string(args, "source"),
        optional_string(args, "sourcetype"),
    );

    match until_cancelled(cancel, client.send_event(&payload)).await {
        None => cancelled(),
        Some(Err(e)) => failed("Failed to send event", e),
        Some(Ok(())) => ToolResult::text(format!("Successfully sent event to index: {}", index)),
    }
}
