//! Configuration management for the Splunk search CLI.
//!
//! This crate resolves the Splunk host and API token through an ordered
//! chain of credential providers (flags, config file, environment, keyring),
//! reads connection tunables from the environment, and persists the host and
//! token written by `splunk configure`.

pub mod constants;
pub mod credentials;
mod loader;
pub mod persistence;
pub mod types;

pub use credentials::{
    ConfigFileCredentials, CredentialChain, CredentialProvider, EnvCredentials,
    ExplicitCredentials, KeyringCredentials,
};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use persistence::{ConfigManager, default_config_path};
pub use types::{Config, PersistedConfig};
