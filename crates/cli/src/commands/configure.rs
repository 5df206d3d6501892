//! `configure` command: store the host in the config file and the token in the keyring.
//!
//! Responsibilities:
//! - Print token creation instructions to stderr.
//! - Read the token (hidden prompt on a terminal, one stdin line otherwise).
//! - Persist host and token through `ConfigManager`.
//!
//! Does NOT handle:
//! - Validating the token against the server.

use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use splunk_search_config::ConfigManager;
use tracing::info;

/// Instructions shown before the token prompt.
pub fn token_instructions(host: &str) -> String {
    format!(
        "To create an authentication token in Splunk:\n\
         1. Log in to your Splunk instance at https://{host}:8000\n\
         2. Go to Settings > Tokens\n\
         3. Click 'New Token' and generate a token\n\
         The token will be stored securely in your system's keyring.\n"
    )
}

fn read_token() -> Result<SecretString> {
    let stdin = std::io::stdin();

    if stdin.is_terminal() {
        let input = dialoguer::Password::new()
            .with_prompt("Enter Splunk API token")
            .allow_empty_password(true)
            .interact()
            .context("failed to read token")?;
        return Ok(SecretString::new(input.into()));
    }

    eprint!("\nEnter Splunk API token: ");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("failed to read token")?;
    Ok(SecretString::new(line.into()))
}

/// Trim the raw input and reject an empty token.
fn validate_token(raw: &SecretString) -> Result<SecretString> {
    let trimmed = raw.expose_secret().trim();
    if trimmed.is_empty() {
        anyhow::bail!("token cannot be empty");
    }
    Ok(SecretString::new(trimmed.to_string().into()))
}

pub fn run(host: &str, config_path: Option<PathBuf>) -> Result<()> {
    let host = host.trim();
    if host.is_empty() {
        anyhow::bail!("host is required");
    }

    eprint!("{}", token_instructions(host));
    let token = validate_token(&read_token()?)?;

    let manager = match config_path {
        Some(path) => ConfigManager::new_with_path(path),
        None => ConfigManager::new()?,
    };

    manager.save_host(host)?;
    manager
        .save_token(host, &token)
        .context("failed to save token to keyring")?;

    info!(host, path = %manager.config_path().display(), "Saved configuration");
    eprintln!("Configuration saved successfully for host: {}", host);
    Ok(())
}
