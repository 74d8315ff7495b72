//! Index lifecycle and introspection endpoints.

use reqwest::{Method, Request};

use crate::endpoints::{json_request, new_request, segment};
use crate::error::Result;
use crate::models::IndexConfig;

/// `GET /api/v1/indexes`
pub fn list_indexes(endpoint: &str) -> Result<Request> {
    new_request(Method::GET, endpoint, "/api/v1/indexes")
}

/// `GET /api/v1/indexes/{index_id}`
pub fn get_index(endpoint: &str, index_id: &str) -> Result<Request> {
    new_request(
        Method::GET,
        endpoint,
        &format!("/api/v1/indexes/{}", segment(index_id)?),
    )
}

/// `POST /api/v1/indexes` with the config as JSON body.
pub fn create_index(endpoint: &str, config: &IndexConfig) -> Result<Request> {
    json_request(Method::POST, endpoint, "/api/v1/indexes", config)
}

/// `DELETE /api/v1/indexes/{index_id}`
pub fn delete_index(endpoint: &str, index_id: &str) -> Result<Request> {
    new_request(
        Method::DELETE,
        endpoint,
        &format!("/api/v1/indexes/{}", segment(index_id)?),
    )
}

/// `PUT /api/v1/indexes/{index_id}/clear`
pub fn clear_index(endpoint: &str, index_id: &str) -> Result<Request> {
    new_request(
        Method::PUT,
        endpoint,
        &format!("/api/v1/indexes/{}/clear", segment(index_id)?),
    )
}

/// `GET /api/v1/indexes/{index_id}/describe`
pub fn describe_index(endpoint: &str, index_id: &str) -> Result<Request> {
    new_request(
        Method::GET,
        endpoint,
        &format!("/api/v1/indexes/{}/describe", segment(index_id)?),
    )
}

/// `GET /api/v1/indexes/{index_id}/splits`
pub fn list_splits(endpoint: &str, index_id: &str) -> Result<Request> {
    new_request(
        Method::GET,
        endpoint,
        &format!("/api/v1/indexes/{}/splits", segment(index_id)?),
    )
}
