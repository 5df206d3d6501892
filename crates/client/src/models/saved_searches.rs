//! Saved search models for the Splunk saved search API.

use serde::{Deserialize, Serialize};

/// Saved search information.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SavedSearch {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cron_schedule: Option<String>,
}

/// `content` block of a saved search entry.
#[derive(Debug, Deserialize, Clone, Default)]
pub(crate) struct SavedSearchContent {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cron_schedule: Option<String>,
    #[serde(default)]
    pub actions: Option<String>,
}

/// Parameters for creating a new saved search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SavedSearchCreateParams {
    /// The name of the saved search (required).
    pub name: String,
    /// The search query (required).
    pub search: String,
    /// Optional description.
    pub description: Option<String>,
}
