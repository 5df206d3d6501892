//! Event submission payload for the simple receiver endpoint.

use serde::Serialize;
use serde_json::{Map, Value};

/// Body posted to `/services/receivers/simple`.
///
/// Empty `index`, `source` and `sourcetype` are omitted so the server
/// applies its own defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPayload {
    pub event: Map<String, Value>,
    /// Unix epoch seconds.
    pub time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sourcetype: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl EventPayload {
    /// Build a payload stamped with the current time.
    pub fn new(event: Map<String, Value>, index: &str, source: &str, sourcetype: &str) -> Self {
        Self {
            event,
            time: chrono::Utc::now().timestamp(),
            index: non_empty(index),
            source: non_empty(source),
            sourcetype: non_empty(sourcetype),
        }
    }

    /// Parse the event body from a JSON object string.
    pub fn parse_event(raw: &str) -> Result<Map<String, Value>, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
