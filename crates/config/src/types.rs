//! Resolved configuration types.
//!
//! Responsibilities:
//! - Hold the connection settings for one invocation (host, token, port, timeout, TLS).
//! - Derive the management API base URL from the configured host.
//!
//! Does NOT handle:
//! - Locating credentials (see `credentials`).
//! - Persisting configuration (see `persistence`).
//!
//! Invariants:
//! - `Config` is built once per invocation and never mutated afterwards.
//! - The token is a `SecretString` and never appears in `Debug` output.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::constants::{DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS};
use crate::loader::ConfigError;

/// Connection configuration for a single invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Splunk host name, or a full `http(s)://` URL.
    pub host: String,
    /// API bearer token.
    pub token: SecretString,
    /// Management port, used only when `host` has no scheme.
    pub port: u16,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
    /// Accept invalid TLS certificates (self-signed deployments).
    pub skip_verify: bool,
}

impl Config {
    /// Create a configuration with default port, timeout and TLS settings.
    pub fn new(host: impl Into<String>, token: SecretString) -> Self {
        Self {
            host: host.into(),
            token,
            port: DEFAULT_SPLUNK_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            skip_verify: false,
        }
    }

    /// Base URL of the management API.
    ///
    /// A bare host maps to `https://{host}:{port}`. A host that already
    /// carries an `http://` or `https://` scheme is used verbatim.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let host = self.host.trim();
        let candidate = if host.starts_with("http://") || host.starts_with("https://") {
            host.trim_end_matches('/').to_string()
        } else {
            format!("https://{}:{}", host, self.port)
        };

        url::Url::parse(&candidate).map_err(|e| ConfigError::InvalidValue {
            var: "host".to_string(),
            message: e.to_string(),
        })?;

        Ok(candidate)
    }
}

/// On-disk configuration (`config.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfig {
    #[serde(default)]
    pub host: String,
}
