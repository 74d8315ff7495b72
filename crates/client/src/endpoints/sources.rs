//! Source lifecycle endpoints.

use reqwest::{Method, Request};

use crate::endpoints::{json_request, new_request, segment};
use crate::error::Result;
use crate::models::SourceConfig;

/// `POST /api/v1/indexes/{index_id}/sources` with the config as JSON body.
pub fn create_source(endpoint: &str, index_id: &str, config: &SourceConfig) -> Result<Request> {
    json_request(
        Method::POST,
        endpoint,
        &format!("/api/v1/indexes/{}/sources", segment(index_id)?),
        config,
    )
}

/// `DELETE /api/v1/indexes/{index_id}/sources/{source_id}`
pub fn delete_source(endpoint: &str, index_id: &str, source_id: &str) -> Result<Request> {
    new_request(
        Method::DELETE,
        endpoint,
        &format!(
            "/api/v1/indexes/{}/sources/{}",
            segment(index_id)?,
            segment(source_id)?
        ),
    )
}
