//! Scheduled alert models.
//!
//! Alerts are saved searches with `is_scheduled=1`; they are listed through
//! the saved search collection and carry the configured alert actions.

use serde::{Deserialize, Serialize};

/// A scheduled alert.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Alert {
    pub name: String,
    pub search: String,
    pub description: Option<String>,
    pub cron_schedule: Option<String>,
    /// Comma-separated alert action names (`email`, `webhook`...).
    pub actions: Option<String>,
}
