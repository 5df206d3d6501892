//! Data models for Splunk API responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod alerts;
pub mod common;
pub mod events;
pub mod jobs;
pub mod results;
pub mod saved_searches;
pub mod server;

pub use alerts::Alert;
pub use common::{Entry, MessageType, SplunkMessage, SplunkMessages, SplunkResponse};
pub use events::EventPayload;
pub use jobs::{JobHandle, JobStatus};
pub use results::{FieldValue, ResultRow, ResultSet, Scalar};
pub use saved_searches::{SavedSearch, SavedSearchCreateParams};
pub use server::ServerInfo;
