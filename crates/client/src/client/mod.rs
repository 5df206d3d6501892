//! Main Splunk REST API client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `search`: Search job methods and the `JobApi` implementation
//! - `saved`: Saved search and alert methods
//! - `server`: Server info and event submission
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Polling and result conversion policy (see [`crate::search`])
//!
//! # Invariants
//! - The token is loaded once before the first request and never refreshed;
//!   an expired token surfaces as a 401 `RemoteRejected`.
//! - The client is shared read-only by every component of one invocation.

pub mod builder;

mod saved;
mod search;
mod server;

use secrecy::{ExposeSecret, SecretString};
use splunk_search_config::Config;

use crate::error::Result;
use builder::SplunkClientBuilder;

/// Splunk REST API client.
///
/// ```rust,ignore
/// let client = SplunkClient::from_config(&config)?;
/// let info = client.server_info().await?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) token: SecretString,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> SplunkClientBuilder {
        SplunkClientBuilder::new()
    }

    /// Build a client straight from resolved configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        SplunkClientBuilder::new().from_config(config)?.build()
    }

    /// Base URL of the management API, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn auth_token(&self) -> &str {
        self.token.expose_secret()
    }
}
