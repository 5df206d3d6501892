//! Log-safe rendering of search queries.
//!
//! Queries may carry tokens or PII, so logs only ever see the length and a
//! short hash that lets operators correlate lines.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Redact a query string for logging, showing only length and a short hash prefix.
pub fn redact_query(query: &str) -> String {
    let mut hasher = DefaultHasher::new();
    query.hash(&mut hasher);
    format!("<{} chars, hash={:08x}>", query.len(), hasher.finish() as u32)
}
