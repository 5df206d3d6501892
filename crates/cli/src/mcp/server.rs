//! Line-delimited JSON-RPC loop.
//!
//! Responsibilities:
//! - Read one request per line, route it, write one response per line.
//! - Answer `initialize`, `ping`, `tools/list` and `tools/call`.
//!
//! Does NOT handle:
//! - Batched requests.
//!
//! Invariants:
//! - Notifications (requests without an id) never get a reply.
//! - Each response is flushed before the next line is read.

use anyhow::Result;
use serde_json::{Map, Value, json};
use splunk_search_client::SplunkClient;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::protocol::{
    INTERNAL_ERROR, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR, PROTOCOL_VERSION, RpcRequest,
    RpcResponse, SERVER_NAME, SERVER_VERSION,
};
use super::tools;
use crate::cancellation::{CancellationToken, Cancelled};

/// Serve requests from `reader` until EOF.
///
/// Returns `Cancelled` if the token trips while waiting for input.
pub async fn serve<R, W>(
    client: &SplunkClient,
    reader: R,
    writer: &mut W,
    cancel: &CancellationToken,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = cancel.cancelled() => return Err(Cancelled.into()),
        };
        let Some(line) = line else {
            debug!("stdin closed, stopping MCP server");
            return Ok(());
        };

        if line.trim().is_empty() {
            continue;
        }

        if let Some(response) = handle_line(client, &line, cancel).await {
            write_response(writer, &response).await?;
        }
    }
}

async fn handle_line(
    client: &SplunkClient,
    line: &str,
    cancel: &CancellationToken,
) -> Option<RpcResponse> {
    let req: RpcRequest = match serde_json::from_str(line) {
        Ok(req) => req,
        Err(e) => {
            return Some(RpcResponse::failure(
                Value::Null,
                PARSE_ERROR,
                format!("parse error: {e}"),
            ));
        }
    };

    debug!(method = %req.method, "Request");

    if req.is_notification() {
        return None;
    }
    let id = req.id.clone().unwrap_or(Value::Null);

    let response = match req.method.as_str() {
        "initialize" => RpcResponse::success(id, initialize_result()),
        "ping" => RpcResponse::success(id, json!({})),
        "tools/list" => RpcResponse::success(id, json!({ "tools": tools::definitions() })),
        "tools/call" => handle_tool_call(client, id, &req.params, cancel).await,
        other => RpcResponse::failure(id, METHOD_NOT_FOUND, format!("method not found: {other}")),
    };
    Some(response)
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": true }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

async fn handle_tool_call(
    client: &SplunkClient,
    id: Value,
    params: &Value,
    cancel: &CancellationToken,
) -> RpcResponse {
    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return RpcResponse::failure(id, INVALID_PARAMS, "invalid params: missing tool name");
    };

    let empty = Map::new();
    let args = match params.get("arguments") {
        None | Some(Value::Null) => &empty,
        Some(Value::Object(map)) => map,
        Some(_) => {
            return RpcResponse::failure(
                id,
                INVALID_PARAMS,
                "invalid params: arguments must be an object",
            );
        }
    };

    match tools::call_tool(client, name, args, cancel).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => RpcResponse::success(id, value),
            Err(e) => RpcResponse::failure(id, INTERNAL_ERROR, e.to_string()),
        },
        Err(e) => RpcResponse::failure(id, INVALID_PARAMS, e.to_string()),
    }
}

async fn write_response<W: AsyncWrite + Unpin>(writer: &mut W, resp: &RpcResponse) -> Result<()> {
    let line = serde_json::to_string(resp)?;
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
