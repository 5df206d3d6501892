//! Percent-encoding for values interpolated into REST paths.
//!
//! Job ids are server-generated but still travel through user input (tool
//! calls, scripts), so they are encoded before being placed in a path:
//! a `/` would otherwise address a different resource and `?` or `#`
//! would truncate the path.
//!
//! ```
//! use splunk_search_client::endpoints::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("scheduler__admin/x"), "scheduler__admin%2Fx");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Bytes escaped inside one path segment (RFC 3986 §3.3 plus Splunk-sensitive characters).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b';')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}')
    .add(b'~');

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
