//! Search endpoint.

use reqwest::{Method, Request};

use crate::endpoints::{new_request, segment};
use crate::error::Result;

/// `GET /api/v1/{index_id}/search?query={query}`
///
/// The query is inserted as given. Characters with a meaning in URLs
/// (`&`, `#`, `+`, ...) must be percent-encoded by the caller.
pub fn search(endpoint: &str, index_id: &str, query: &str) -> Result<Request> {
    new_request(
        Method::GET,
        endpoint,
        &format!("/api/v1/{}/search?query={}", segment(index_id)?, query),
    )
}
