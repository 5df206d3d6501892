//! Error types for the Splunk client.
//!
//! Responsibilities:
//! - Classify every transport-level failure into one `ClientError` variant.
//! - Offer status helpers the front ends use to pick exit codes.
//!
//! Does NOT handle:
//! - Search lifecycle failures (see `crate::search::SearchError`).
//! - Retrying. No variant is retried anywhere in this crate.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network, DNS, TLS or timeout failure before a response was received.
    #[error("Transport failure")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status from the Splunk server.
    #[error("API request failed with status {status} at {url}: {message}")]
    RemoteRejected {
        status: u16,
        url: String,
        message: String,
    },

    /// A successful response whose body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request rejected locally before being sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteRejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for 401 responses (bad or expired token).
    pub fn is_auth_error(&self) -> bool {
        self.status() == Some(401)
    }

    /// True for 403 responses.
    pub fn is_permission_error(&self) -> bool {
        self.status() == Some(403)
    }

    /// True for 404 responses.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// True when no response was received at all.
    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}
