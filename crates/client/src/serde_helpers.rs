//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Accept either JSON numbers or strings for numeric fields.
//! - Accept `true`/`false`, `0`/`1` and their string forms for flags.
//!
//! Invariants / assumptions:
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers
//!   depending on endpoint and version.
//! - Errors are generic parse errors and never echo surrounding payload.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagLike {
    Bool(bool),
    U64(u64),
    String(String),
}

pub fn usize_from_string_or_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::U64(v) => usize::try_from(v).map_err(D::Error::custom),
        NumberOrString::I64(v) => usize::try_from(v).map_err(D::Error::custom),
        NumberOrString::F64(v) if v >= 0.0 && v.fract() == 0.0 => Ok(v as usize),
        NumberOrString::F64(v) => Err(D::Error::custom(format!("expected a count, got {v}"))),
        NumberOrString::String(s) => s.trim().parse::<usize>().map_err(D::Error::custom),
    }
}

pub fn f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::U64(v) => Ok(v as f64),
        NumberOrString::I64(v) => Ok(v as f64),
        NumberOrString::F64(v) => Ok(v),
        NumberOrString::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
    }
}

pub fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match FlagLike::deserialize(deserializer)? {
        FlagLike::Bool(b) => Ok(b),
        FlagLike::U64(v) => Ok(v != 0),
        FlagLike::String(s) => match s.trim() {
            "1" | "true" | "True" | "TRUE" => Ok(true),
            "0" | "false" | "False" | "FALSE" | "" => Ok(false),
            other => Err(D::Error::custom(format!("invalid flag value: {other}"))),
        },
    }
}
