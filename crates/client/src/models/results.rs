//! Front-end neutral search result model.
//!
//! Responsibilities:
//! - Represent result field values as a closed sum type (scalar, sequence, mapping).
//! - Preserve field order within a row and row order within a result set.
//! - Convert decoded Splunk JSON into that model exactly once.
//!
//! Does NOT handle:
//! - Rendering. Front ends decide how a row is displayed.
//!
//! Invariants:
//! - A `ResultSet` is immutable after construction.
//! - Rows keep the order the server returned them in.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::{ClientError, Result};

/// A leaf value inside a result field.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// The value of one result field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(Scalar),
    /// Multivalue fields and JSON arrays.
    Sequence(Vec<FieldValue>),
    /// Nested objects, in server order.
    Mapping(Vec<(String, FieldValue)>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Text(value.into()))
    }

    /// Borrow the string content of a text scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(b) => Self::Scalar(Scalar::Bool(b)),
            Value::Number(n) => Self::Scalar(Scalar::Number(n)),
            Value::String(s) => Self::Scalar(Scalar::Text(s)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(scalar) => scalar.serialize(serializer),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(entries) => serialize_entries(entries, serializer),
        }
    }
}

fn serialize_entries<S: Serializer>(
    entries: &[(String, FieldValue)],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

/// Text strings render raw; every other value renders as compact JSON.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(Scalar::Text(s)) => f.write_str(s),
            Self::Scalar(Scalar::Null) => f.write_str("null"),
            Self::Scalar(Scalar::Bool(b)) => write!(f, "{b}"),
            Self::Scalar(Scalar::Number(n)) => write!(f, "{n}"),
            other => {
                let json = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

/// One result row: field name to value, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultRow {
    fields: Vec<(String, FieldValue)>,
}

impl ResultRow {
    pub fn new(fields: Vec<(String, FieldValue)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl TryFrom<Value> for ResultRow {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                fields: map
                    .into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            }),
            other => Err(ClientError::Decode(format!(
                "expected result row object, got {}",
                json_kind(&other)
            ))),
        }
    }
}

impl Serialize for ResultRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serialize_entries(&self.fields, serializer)
    }
}

/// Rows fetched for a completed job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub rows: Vec<ResultRow>,
    /// Total row count reported by the server, when present.
    pub total: Option<usize>,
    pub preview: bool,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Decode a `/results` response body.
    ///
    /// Accepts `{"results": [...]}` and a bare top-level array. An empty
    /// body (Splunk sends one for jobs with no rows) yields an empty set.
    pub fn from_response_body(body: &str) -> Result<Self> {
        if body.trim().is_empty() {
            return Ok(Self::default());
        }

        let json: Value = serde_json::from_str(body).map_err(|e| {
            ClientError::Decode(format!("Failed to parse search results response: {e}"))
        })?;

        let (rows, total, preview) = match json {
            Value::Array(rows) => (rows, None, false),
            Value::Object(mut obj) => {
                let rows = match obj.remove("results") {
                    Some(Value::Array(rows)) => rows,
                    None | Some(Value::Null) => Vec::new(),
                    Some(other) => {
                        return Err(ClientError::Decode(format!(
                            "expected results array, got {}",
                            json_kind(&other)
                        )));
                    }
                };
                let total = obj.get("total").and_then(|t| {
                    t.as_u64()
                        .map(|n| n as usize)
                        .or_else(|| t.as_str().and_then(|s| s.parse().ok()))
                });
                let preview = obj.get("preview").and_then(Value::as_bool).unwrap_or(false);
                (rows, total, preview)
            }
            other => {
                return Err(ClientError::Decode(format!(
                    "expected results object, got {}",
                    json_kind(&other)
                )));
            }
        };

        Ok(Self {
            rows: rows
                .into_iter()
                .map(ResultRow::try_from)
                .collect::<Result<Vec<_>>>()?,
            total,
            preview,
        })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
