//! # Utility Functions
//!
//! Identifier generation and path helpers used by the router and entry point.

use chrono::Utc;
use uuid::Uuid;

/// Generates the server-side identifier of a new clothing item (UUID v4).
pub fn generate_item_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generates a request identifier for requests that arrive without a ray id.
///
/// The identifier has the form `{timestamp_millis}-{uuid}` so log lines sort
/// by arrival time.
pub fn generate_request_id() -> String {
    format!("{}-{}", Utc::now().timestamp_millis(), Uuid::new_v4())
}

/// Returns the path segment at `index` after splitting on `/`.
///
/// The leading slash yields an empty first segment, so for
/// `/clothing/abc` index 1 is `clothing` and index 2 is `abc`.
/// Missing segments come back empty.
pub fn path_segment(path: &str, index: usize) -> &str {
    path.split('/').nth(index).unwrap_or_default()
}
