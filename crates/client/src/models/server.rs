//! Server information model.

use serde::Serialize;
use serde_json::{Map, Value};

use super::results::FieldValue;

/// Server information from `/services/server/info`.
///
/// Splunk returns dozens of loosely typed fields that vary by version, so
/// the content is kept as an ordered field map rather than a fixed struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ServerInfo {
    fields: Map<String, Value>,
}

impl ServerInfo {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Splunk version string, if reported.
    pub fn version(&self) -> Option<&str> {
        self.fields.get("version").and_then(Value::as_str)
    }

    /// Fields in server order, converted to the neutral value model.
    pub fn entries(&self) -> impl Iterator<Item = (&str, FieldValue)> {
        self.fields
            .iter()
            .map(|(k, v)| (k.as_str(), FieldValue::from(v.clone())))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
