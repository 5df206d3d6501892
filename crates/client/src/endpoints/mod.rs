//! REST API endpoint implementations.
//!
//! Each endpoint is a free function taking the shared `reqwest::Client`,
//! the base URL and the bearer token, and issuing exactly one request.

mod receivers;
mod request;
pub mod search;
mod server;
mod url_encoding;

pub use receivers::send_event;
pub use request::{extract_entry_content, read_json, send_request};
pub use search::{
    create_job, create_saved_search, get_job_status, get_results, list_alerts,
    list_saved_searches,
};
pub use server::get_server_info;
pub use url_encoding::{PATH_SEGMENT_ENCODE_SET, encode_path_segment};
