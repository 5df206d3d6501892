//! Centralized constants for the Splunk search workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Fixed interval between two job status checks in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Overall deadline for a search issued through the tool-call server.
///
/// The command-line path has no deadline and polls until the job is done
/// or the process is interrupted.
pub const TOOL_CALL_SEARCH_DEADLINE_SECS: u64 = 60;

/// Default maximum number of search results to return.
pub const DEFAULT_MAX_RESULTS: u64 = 100;

// =============================================================================
// Credential Storage
// =============================================================================

/// Service name used for keyring storage. The keyring account is the host.
pub const KEYRING_SERVICE: &str = "splunk-cli";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "splunk-cli";

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_HOST: &str = "SPLUNK_HOST";
pub const ENV_TOKEN: &str = "SPLUNK_TOKEN";
pub const ENV_PORT: &str = "SPLUNK_PORT";
pub const ENV_TIMEOUT: &str = "SPLUNK_TIMEOUT";
pub const ENV_SKIP_VERIFY: &str = "SPLUNK_SKIP_VERIFY";
pub const ENV_CONFIG_PATH: &str = "SPLUNK_CONFIG_PATH";
