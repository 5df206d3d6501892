//! Persistence of the configured host and API token.
//!
//! Responsibilities:
//! - Determine the platform config file location via `directories`.
//! - Read and write `config.json` (host only).
//! - Store the API token in the system keyring, keyed by host.
//!
//! Does NOT handle:
//! - Credential resolution order (see `credentials`).
//! - Interactive prompting (the CLI `configure` command owns that).
//!
//! Invariants:
//! - The token is never written to disk.
//! - On Unix the config directory is created 0700 and the file written 0600.

use secrecy::{ExposeSecret, SecretString};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, KEYRING_SERVICE};
use crate::loader::ConfigError;
use crate::types::PersistedConfig;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/splunk-cli/config.json`
/// - macOS: `~/Library/Application Support/splunk-cli/config.json`
/// - Windows: `%AppData%\splunk-cli\config\config.json`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = directories::ProjectDirs::from("", "", CONFIG_DIR_NAME)
        .ok_or(ConfigError::ConfigDirUnavailable)?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Reads and writes persisted configuration.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
    keyring_service: String,
}

impl ConfigManager {
    /// Create a manager for the default config location.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self::new_with_path(default_config_path()?))
    }

    /// Create a manager for an explicit config file path.
    pub fn new_with_path(config_path: PathBuf) -> Self {
        Self {
            config_path,
            keyring_service: KEYRING_SERVICE.to_string(),
        }
    }

    /// Path of the managed config file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load the persisted config file.
    pub fn load(&self) -> Result<PersistedConfig, ConfigError> {
        read_config_file(&self.config_path)
    }

    /// Save the host to the config file, creating parent directories as needed.
    pub fn save_host(&self, host: &str) -> Result<(), ConfigError> {
        let persisted = PersistedConfig {
            host: host.to_string(),
        };

        if let Some(parent) = self.config_path.parent() {
            create_private_dir(parent).map_err(|source| ConfigError::ConfigFileWrite {
                path: self.config_path.clone(),
                source,
            })?;
        }

        let data = serde_json::to_string_pretty(&persisted).map_err(|source| {
            ConfigError::ConfigFileParse {
                path: self.config_path.clone(),
                source,
            }
        })?;

        write_private_file(&self.config_path, data.as_bytes()).map_err(|source| {
            ConfigError::ConfigFileWrite {
                path: self.config_path.clone(),
                source,
            }
        })?;

        debug!("Saved host to {}", self.config_path.display());
        Ok(())
    }

    /// Store the API token for `host` in the system keyring.
    pub fn save_token(&self, host: &str, token: &SecretString) -> Result<(), ConfigError> {
        let entry = keyring::Entry::new(&self.keyring_service, host)?;
        entry.set_password(token.expose_secret())?;
        debug!("Stored token in keyring for host {}", host);
        Ok(())
    }
}

/// Read and parse a config file.
pub(crate) fn read_config_file(path: &Path) -> Result<PersistedConfig, ConfigError> {
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(dir)
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dir)
}

#[cfg(unix)]
fn write_private_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::OpenOptionsExt;

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(data)
}

#[cfg(not(unix))]
fn write_private_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, data)
}
