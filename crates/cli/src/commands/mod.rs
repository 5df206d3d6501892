//! CLI command implementations.
//!
//! Every command except `configure` receives a ready `SplunkClient` built
//! from the resolved configuration, and writes its result to stdout.

pub mod alerts;
pub mod configure;
pub mod saved_searches;
pub mod search;
pub mod send_event;
pub mod server_info;

use std::io::Write;

use anyhow::{Context, Result};

/// Write formatted command output to stdout.
pub(crate) fn print_output(output: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write output")
}
