//! Cluster information endpoints.

use reqwest::{Method, Request};

use crate::endpoints::new_request;
use crate::error::Result;

/// `GET /api/v1/_elastic`
pub fn get_elastic(endpoint: &str) -> Result<Request> {
    new_request(Method::GET, endpoint, "/api/v1/_elastic")
}

/// `GET /api/v1/cluster?format=pretty_json`
pub fn get_cluster(endpoint: &str) -> Result<Request> {
    new_request(Method::GET, endpoint, "/api/v1/cluster?format=pretty_json")
}
