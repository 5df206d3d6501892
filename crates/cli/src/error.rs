//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError`, `SearchError` and `ConfigError` to exit codes.
//! - Treat malformed JSON input (event bodies) as a validation error.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).
//! - A search timeout (8) is never reported as a remote rejection.

use splunk_search_client::{ClientError, SearchError};
use splunk_search_config::ConfigError;

use crate::cancellation::{Cancelled, SIGINT_EXIT_CODE};

/// Structured exit codes for the `splunk` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid or expired token (HTTP 401).
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ConnectionError = 3,

    /// Resource not found - job, saved search, index (HTTP 404).
    NotFound = 4,

    /// Validation error - empty query, bad parameters, undecodable response.
    ValidationError = 5,

    /// Permission denied - insufficient capabilities (HTTP 403).
    PermissionDenied = 6,

    /// Host or token not configured.
    ///
    /// Scripts should run `splunk configure <host>` or export the variables.
    ConfigurationMissing = 7,

    /// The job was still running when the search deadline passed.
    SearchTimedOut = 8,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::RemoteRejected { status, .. } => match status {
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                400 => ExitCode::ValidationError,
                _ => ExitCode::GeneralError,
            },
            ClientError::Transport(_) if err.is_connection_error() => ExitCode::ConnectionError,
            ClientError::Transport(_) => ExitCode::GeneralError,
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::Decode(_) | ClientError::InvalidRequest(_) => ExitCode::ValidationError,
        }
    }
}

impl From<&SearchError> for ExitCode {
    fn from(err: &SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => ExitCode::ValidationError,
            SearchError::TimedOut(_) => ExitCode::SearchTimedOut,
            SearchError::Cancelled => ExitCode::Interrupted,
            SearchError::Submit(e) | SearchError::Status(e) | SearchError::Fetch(e) => {
                ExitCode::from(e)
            }
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            e if e.is_missing_credential() => ExitCode::ConfigurationMissing,
            ConfigError::InvalidValue { .. } => ExitCode::ValidationError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<Cancelled>() {
                return ExitCode::Interrupted;
            }
            if let Some(search_err) = cause.downcast_ref::<SearchError>() {
                return ExitCode::from(search_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if cause.is::<serde_json::Error>() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::time::Duration;

    fn rejected(status: u16) -> ClientError {
        ClientError::RemoteRejected {
            status,
            url: "https://localhost:8089/services/search/jobs".to_string(),
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ConfigurationMissing.as_i32(), 7);
        assert_eq!(ExitCode::SearchTimedOut.as_i32(), 8);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_from_client_error_statuses() {
        assert_eq!(ExitCode::from(&rejected(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&rejected(403)), ExitCode::PermissionDenied);
        assert_eq!(ExitCode::from(&rejected(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&rejected(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&rejected(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_from_client_error_decode() {
        let err = ClientError::Decode("expected value".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_from_search_error() {
        assert_eq!(
            ExitCode::from(&SearchError::TimedOut(Duration::from_secs(60))),
            ExitCode::SearchTimedOut
        );
        assert_eq!(ExitCode::from(&SearchError::EmptyQuery), ExitCode::ValidationError);
        assert_eq!(
            ExitCode::from(&SearchError::Status(rejected(401))),
            ExitCode::AuthenticationFailed
        );
        assert_eq!(ExitCode::from(&SearchError::Cancelled), ExitCode::Interrupted);
    }

    #[test]
    fn test_from_config_error() {
        assert_eq!(
            ExitCode::from(&ConfigError::HostNotConfigured),
            ExitCode::ConfigurationMissing
        );
        assert_eq!(
            ExitCode::from(&ConfigError::TokenNotConfigured),
            ExitCode::ConfigurationMissing
        );
        assert_eq!(
            ExitCode::from(&ConfigError::InvalidValue {
                var: "SPLUNK_PORT".to_string(),
                message: "bad".to_string(),
            }),
            ExitCode::ValidationError
        );
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = Err::<(), _>(rejected(403))
            .context("Failed to list alerts")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::PermissionDenied);

        let err = Err::<(), _>(SearchError::Fetch(rejected(404)))
            .context("search")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_bad_json_input_is_validation() {
        let err = serde_json::from_str::<serde_json::Value>("{not json")
            .context("Failed to parse event JSON")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_unknown_error_is_general() {
        assert_eq!(anyhow::anyhow!("boom").exit_code(), ExitCode::GeneralError);
    }
}
