//! Splunk search CLI.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve the host and token, then run one command or the MCP tool server.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - REST API details or the search lifecycle (see `crates/client`).
//! - Credential lookup order (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing and credential resolution.
//! - Logs always go to stderr; stdout carries only command output or MCP responses.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;
mod mcp;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use splunk_search_config::{Config, ConfigError, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing(json: bool) {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Resolve the connection configuration: flags first, then the credential chain.
fn build_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored so SPLUNK_CONFIG_PATH can still apply
    if let Some(path) = &cli.config_path
        && !path.as_os_str().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader.from_env()?;

    if let Some(host) = &cli.host {
        loader = loader.with_host(host.clone());
    }
    if let Some(token) = &cli.token {
        loader = loader.with_token(token.clone());
    }

    loader.build()
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so every later env read sees its values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    init_tracing(cli.log_json);

    let config = if cli.command.needs_connection() {
        match build_config(&cli) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(ExitCode::from(&e).as_i32());
            }
        }
    } else {
        None
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
