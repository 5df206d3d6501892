//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Transport or search failures (see the client crate).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, paths, etc.).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.
//! - Missing host/token errors carry the `configure` hint so both front ends
//!   can render them verbatim.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Splunk host must be configured (use 'splunk configure <host>' or set SPLUNK_HOST env var)"
    )]
    HostNotConfigured,

    #[error(
        "Splunk token must be set (use 'splunk configure <host>' or set SPLUNK_TOKEN env var)"
    )]
    TokenNotConfigured,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Unable to determine config directory")]
    ConfigDirUnavailable,

    #[error("Failed to read config file at {path}")]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write config file at {path}")]
    ConfigFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// True if a required credential (host or token) could not be found.
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::HostNotConfigured | Self::TokenNotConfigured)
    }
}
