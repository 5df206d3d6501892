//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse the connection tunables (port, timeout, TLS verification)
//!   and the config file override (`SPLUNK_CONFIG_PATH`).
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Host and token lookup (see `credentials`, which also reads the environment).
//! - .env file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid values return `ConfigError::InvalidValue`.

use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CONFIG_PATH, ENV_PORT, ENV_SKIP_VERIFY, ENV_TIMEOUT, MAX_TIMEOUT_SECS,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn invalid(var: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.into(),
    }
}

/// Parse a timeout in seconds, enforcing `1..=MAX_TIMEOUT_SECS`.
pub(crate) fn parse_timeout_secs(var: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw
        .parse()
        .map_err(|_| invalid(var, "must be a number of seconds"))?;
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(invalid(
            var,
            format!("must be between 1 and {} (got {})", MAX_TIMEOUT_SECS, secs),
        ));
    }
    Ok(Duration::from_secs(secs))
}

/// Apply environment variable tunables to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(port) = env_var_or_none(ENV_PORT) {
        let port: u16 = port
            .parse()
            .map_err(|_| invalid(ENV_PORT, "must be a port number (1-65535)"))?;
        if port == 0 {
            return Err(invalid(ENV_PORT, "must be a port number (1-65535)"));
        }
        loader.set_port(Some(port));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        loader.set_timeout(Some(parse_timeout_secs(ENV_TIMEOUT, &timeout)?));
    }
    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH) {
        loader.set_config_path(Some(path.into()));
    }
    if let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY) {
        loader.set_skip_verify(Some(
            skip.parse()
                .map_err(|_| invalid(ENV_SKIP_VERIFY, "must be true or false"))?,
        ));
    }
    Ok(())
}
