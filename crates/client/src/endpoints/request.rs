//! Request execution and response decoding shared by every endpoint.
//!
//! Responsibilities:
//! - Send a prepared request exactly once.
//! - Turn non-success statuses into `ClientError::RemoteRejected`, keeping
//!   the status code and the server's message for diagnostics.
//! - Decode bodies with `serde_json` so malformed JSON surfaces as
//!   `ClientError::Decode` rather than a transport failure.
//!
//! Does NOT handle:
//! - Retries or backoff. A failed request is returned to the caller as-is.

use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Send a request, mapping non-2xx responses to `RemoteRejected`.
pub async fn send_request(builder: RequestBuilder, endpoint: &str, method: &str) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    debug!(endpoint, method, status = status.as_u16(), "Splunk API response");

    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.joined(),
        _ if body.trim().is_empty() => status.canonical_reason().unwrap_or("").to_string(),
        _ => body,
    };

    Err(ClientError::RemoteRejected {
        status: status.as_u16(),
        url,
        message,
    })
}

/// Read the full body and decode it as JSON.
pub async fn read_json(response: Response) -> Result<Value> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Extract the `content` object of the first entry.
///
/// Splunk wraps single resources as `{"entry":[{"content":{...}}]}`; some
/// versions return a bare `{"content":{...}}`.
pub fn extract_entry_content(value: &Value) -> Result<&Value> {
    value
        .get("entry")
        .and_then(|e| e.get(0))
        .and_then(|e| e.get("content"))
        .or_else(|| value.get("content"))
        .ok_or_else(|| ClientError::Decode("Missing entry content in response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_entry_content_from_entry_list() {
        let v = json!({"entry": [{"name": "x", "content": {"isDone": true}}]});
        assert_eq!(extract_entry_content(&v).unwrap(), &json!({"isDone": true}));
    }

    #[test]
    fn test_extract_entry_content_from_top_level() {
        let v = json!({"sid": "1", "content": {"isDone": false}});
        assert_eq!(extract_entry_content(&v).unwrap(), &json!({"isDone": false}));
    }

    #[test]
    fn test_extract_entry_content_missing() {
        let v = json!({"entry": []});
        assert!(matches!(
            extract_entry_content(&v),
            Err(ClientError::Decode(_))
        ));
    }
}
