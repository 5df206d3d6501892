//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges explicit values,
//!   environment tunables and the credential chain into one `Config`.
//! - Load `.env` files before anything else reads the environment.
//!
//! Does NOT handle:
//! - The individual credential sources (see `credentials`).
//! - Persisting configuration changes (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Credentials are resolved exactly once, in `build()`.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_SPLUNK_PORT, DEFAULT_TIMEOUT_SECS};
use crate::credentials::{CredentialChain, ExplicitCredentials};
use crate::types::Config;

/// Configuration loader that builds config from flags, environment and stored credentials.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    host: Option<String>,
    token: Option<String>,
    port: Option<u16>,
    timeout: Option<Duration>,
    skip_verify: Option<bool>,
    config_path: Option<PathBuf>,
    chain: Option<CredentialChain>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read connection tunables from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the host explicitly (highest priority in the chain).
    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the token explicitly (highest priority in the chain).
    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Set the management port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Replace the standard credential chain (primarily for testing).
    pub fn with_credential_chain(mut self, chain: CredentialChain) -> Self {
        self.chain = Some(chain);
        self
    }

    pub(crate) fn set_port(&mut self, port: Option<u16>) {
        if self.port.is_none() {
            self.port = port;
        }
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        if self.timeout.is_none() {
            self.timeout = timeout;
        }
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        if self.config_path.is_none() {
            self.config_path = path;
        }
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        if self.skip_verify.is_none() {
            self.skip_verify = skip;
        }
    }

    /// Resolve credentials and build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let chain = match self.chain {
            Some(chain) => chain,
            None => CredentialChain::standard(
                ExplicitCredentials::new(self.host, self.token),
                self.config_path,
            ),
        };

        let host = chain.load_host()?;
        let token = chain.load_token(&host)?;

        Ok(Config {
            host,
            token,
            port: self.port.unwrap_or(DEFAULT_SPLUNK_PORT),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            skip_verify: self.skip_verify.unwrap_or(false),
        })
    }
}
