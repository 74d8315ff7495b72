//! REST API request builders and the response invoker.
//!
//! Each builder turns its arguments into a ready-to-send [`reqwest::Request`]
//! (method, URL and optional JSON body). Builders do no I/O and only fail
//! when the request cannot be constructed. [`request`] sends a prepared
//! request and decodes the response.

mod cluster;
mod indexes;
pub mod request;
mod search;
mod sources;

pub use cluster::{get_cluster, get_elastic};
pub use indexes::{
    clear_index, create_index, delete_index, describe_index, get_index, list_indexes, list_splits,
};
pub use request::{is_success_status, request_list, request_no_content, request_value};
pub use search::search;
pub use sources::{create_source, delete_source};

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Method, Request, Url};
use serde::Serialize;

use crate::error::{ClientError, Result};

/// `<endpoint><path>`, parsed as an absolute URL.
///
/// Path segments are inserted verbatim; only standard URL parsing applies.
/// Builders pass identifiers through [`segment`] first.
fn api_url(endpoint: &str, path: &str) -> Result<Url> {
    let raw = format!("{}{}", endpoint, path);
    Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
}

/// An identifier to be inserted as one path segment.
///
/// `.` and `..` (also percent-encoded) are rejected: URL parsing would
/// resolve them against the rest of the path and target another resource.
fn segment(id: &str) -> Result<&str> {
    let decoded = id.to_ascii_lowercase().replace("%2e", ".");
    if decoded == "." || decoded == ".." {
        return Err(ClientError::InvalidUrl(format!(
            "'{}' is not a valid path segment",
            id
        )));
    }
    Ok(id)
}

fn new_request(method: Method, endpoint: &str, path: &str) -> Result<Request> {
    Ok(Request::new(method, api_url(endpoint, path)?))
}

fn json_request<T: Serialize + ?Sized>(
    method: Method,
    endpoint: &str,
    path: &str,
    body: &T,
) -> Result<Request> {
    let bytes = serde_json::to_vec(body).map_err(ClientError::Serialization)?;
    let mut request = new_request(method, endpoint, path)?;
    request
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    *request.body_mut() = Some(bytes.into());
    Ok(request)
}
