//! Search lifecycle errors.

use std::time::Duration;
use thiserror::Error;

use crate::error::ClientError;

/// Why a search did not produce results.
///
/// Each remote stage wraps its `ClientError` in its own variant so callers
/// can tell "job never finished" from "job finished but results could not
/// be retrieved".
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search query must not be empty")]
    EmptyQuery,

    #[error("Failed to run search")]
    Submit(#[source] ClientError),

    #[error("Failed to get search status")]
    Status(#[source] ClientError),

    #[error("Failed to get search results")]
    Fetch(#[source] ClientError),

    #[error("Search timed out after {} seconds", .0.as_secs())]
    TimedOut(Duration),

    #[error("Search cancelled")]
    Cancelled,
}

impl SearchError {
    /// The transport error behind a remote-stage failure.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Submit(e) | Self::Status(e) | Self::Fetch(e) => Some(e),
            _ => None,
        }
    }
}
