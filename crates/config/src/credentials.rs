//! Credential provider chain.
//!
//! Responsibilities:
//! - Define the `CredentialProvider` trait: each source may offer a host, a token, or both.
//! - Provide the built-in sources: explicit values, config file, environment, keyring.
//! - Resolve host and token by asking providers in order, first success wins.
//!
//! Does NOT handle:
//! - Prompting the user (never done here; missing values are fatal).
//! - Writing credentials (see `persistence`).
//!
//! Invariants:
//! - Host order: explicit → config file → `SPLUNK_HOST`.
//! - Token order: explicit → `SPLUNK_TOKEN` → keyring (account = host).
//! - Blank values are treated as absent.
//! - A provider failure (unreadable file, keyring backend error) is logged at
//!   debug level and the chain moves on.

use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use tracing::debug;

use crate::constants::{ENV_HOST, ENV_TOKEN, KEYRING_SERVICE};
use crate::loader::{ConfigError, env_var_or_none};
use crate::persistence::{default_config_path, read_config_file};

/// A single source of connection credentials.
pub trait CredentialProvider: Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Try to load the Splunk host.
    fn try_load_host(&self) -> Option<String> {
        None
    }

    /// Try to load the API token for `host`.
    fn try_load_token(&self, _host: &str) -> Option<SecretString> {
        None
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Values supplied directly, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct ExplicitCredentials {
    host: Option<String>,
    token: Option<SecretString>,
}

impl ExplicitCredentials {
    pub fn new(host: Option<String>, token: Option<String>) -> Self {
        Self {
            host,
            token: token.map(|t| SecretString::new(t.into())),
        }
    }
}

impl CredentialProvider for ExplicitCredentials {
    fn name(&self) -> &'static str {
        "explicit"
    }

    fn try_load_host(&self) -> Option<String> {
        self.host.as_deref().and_then(non_blank)
    }

    fn try_load_token(&self, _host: &str) -> Option<SecretString> {
        self.token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty())
            .cloned()
    }
}

/// Host stored in `config.json`.
#[derive(Debug, Clone)]
pub struct ConfigFileCredentials {
    path: Option<PathBuf>,
}

impl ConfigFileCredentials {
    /// Use an explicit file path, or the platform default when `None`.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl CredentialProvider for ConfigFileCredentials {
    fn name(&self) -> &'static str {
        "config-file"
    }

    fn try_load_host(&self) -> Option<String> {
        let path = match &self.path {
            Some(p) => p.clone(),
            None => default_config_path()
                .map_err(|e| debug!("No config path available: {}", e))
                .ok()?,
        };

        match read_config_file(&path) {
            Ok(persisted) => non_blank(&persisted.host),
            Err(e) => {
                debug!("Config file unavailable: {}", e);
                None
            }
        }
    }
}

/// `SPLUNK_HOST` / `SPLUNK_TOKEN` environment variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

impl CredentialProvider for EnvCredentials {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn try_load_host(&self) -> Option<String> {
        env_var_or_none(ENV_HOST)
    }

    fn try_load_token(&self, _host: &str) -> Option<SecretString> {
        env_var_or_none(ENV_TOKEN).map(|t| SecretString::new(t.into()))
    }
}

/// API token stored in the system keyring under the host name.
#[derive(Debug, Clone)]
pub struct KeyringCredentials {
    service: String,
}

impl Default for KeyringCredentials {
    fn default() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
        }
    }
}

impl CredentialProvider for KeyringCredentials {
    fn name(&self) -> &'static str {
        "keyring"
    }

    fn try_load_token(&self, host: &str) -> Option<SecretString> {
        let result = keyring::Entry::new(&self.service, host).and_then(|e| e.get_password());
        match result {
            Ok(token) => non_blank(&token).map(|t| SecretString::new(t.into())),
            Err(e) => {
                debug!("Keyring lookup for {} failed: {}", host, e);
                None
            }
        }
    }
}

/// Ordered credential sources for host and token.
#[derive(Default)]
pub struct CredentialChain {
    host_providers: Vec<Box<dyn CredentialProvider>>,
    token_providers: Vec<Box<dyn CredentialProvider>>,
}

impl std::fmt::Debug for CredentialChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |ps: &[Box<dyn CredentialProvider>]| -> Vec<&'static str> {
            ps.iter().map(|p| p.name()).collect()
        };
        f.debug_struct("CredentialChain")
            .field("host_providers", &names(&self.host_providers))
            .field("token_providers", &names(&self.token_providers))
            .finish()
    }
}

impl CredentialChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard chain shared by both front ends.
    pub fn standard(explicit: ExplicitCredentials, config_path: Option<PathBuf>) -> Self {
        Self::new()
            .with_host_provider(explicit.clone())
            .with_host_provider(ConfigFileCredentials::new(config_path))
            .with_host_provider(EnvCredentials)
            .with_token_provider(explicit)
            .with_token_provider(EnvCredentials)
            .with_token_provider(KeyringCredentials::default())
    }

    /// Append a host source.
    pub fn with_host_provider(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.host_providers.push(Box::new(provider));
        self
    }

    /// Append a token source.
    pub fn with_token_provider(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.token_providers.push(Box::new(provider));
        self
    }

    /// Resolve the host from the first provider that has one.
    pub fn load_host(&self) -> Result<String, ConfigError> {
        self.host_providers
            .iter()
            .find_map(|p| {
                let host = p.try_load_host()?;
                debug!("Host resolved from {}", p.name());
                Some(host)
            })
            .ok_or(ConfigError::HostNotConfigured)
    }

    /// Resolve the token for `host` from the first provider that has one.
    pub fn load_token(&self, host: &str) -> Result<SecretString, ConfigError> {
        self.token_providers
            .iter()
            .find_map(|p| {
                let token = p.try_load_token(host)?;
                debug!("Token resolved from {}", p.name());
                Some(token)
            })
            .ok_or(ConfigError::TokenNotConfigured)
    }
}
