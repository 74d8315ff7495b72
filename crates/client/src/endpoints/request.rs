//! Send prepared requests and decode their responses.
//!
//! Three flavors exist, matching what each endpoint returns:
//! - [`request_value`]: a single JSON document.
//! - [`request_list`]: a JSON array.
//! - [`request_no_content`]: nothing worth decoding.
//!
//! All three classify any status outside `[200, 300)` as a remote failure.
//! The value and no-content flavors extract the service's
//! `{"message", "error"}` envelope into [`ClientError::ApiError`]; the list
//! flavor reports the bare status as [`ClientError::StatusError`] and never
//! reads the error body.
//!
//! Invariants:
//! - The response body is released exactly once on every path: it is either
//!   consumed by a read or dropped before the function returns.
//! - The URL reported in errors is the one the request was sent to.

use reqwest::{Request, Response};
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, warn};

use crate::error::{ClientError, Result};
use crate::models::ErrorMessage;
use crate::transport::Transport;

/// True for statuses in `[200, 300)`.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Send `request` and decode a single `T` from a 2xx body.
pub async fn request_value<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: Request,
) -> Result<T> {
    let span = request_span(&request);
    async move {
        let (url, response) = send(transport, request).await?;
        let status = response.status().as_u16();
        if !is_success_status(status) {
            return Err(api_error(status, url, response).await);
        }
        let body = response.bytes().await?;
        decode(&body)
    }
    .instrument(span)
    .await
}

/// Send `request` and decode a JSON array of `T` from a 2xx body.
///
/// Non-2xx responses yield [`ClientError::StatusError`] without looking at
/// the body.
pub async fn request_list<T: DeserializeOwned>(
    transport: &dyn Transport,
    request: Request,
) -> Result<Vec<T>> {
    let span = request_span(&request);
    async move {
        let (url, response) = send(transport, request).await?;
        let status = response.status().as_u16();
        if !is_success_status(status) {
            drop(response);
            return Err(ClientError::StatusError { status, url });
        }
        let body = response.bytes().await?;
        decode(&body)
    }
    .instrument(span)
    .await
}

/// Send `request` and discard the body of a 2xx response.
pub async fn request_no_content(transport: &dyn Transport, request: Request) -> Result<()> {
    let span = request_span(&request);
    async move {
        let (url, response) = send(transport, request).await?;
        let status = response.status().as_u16();
        if !is_success_status(status) {
            return Err(api_error(status, url, response).await);
        }
        drop(response);
        Ok(())
    }
    .instrument(span)
    .await
}

fn request_span(request: &Request) -> tracing::Span {
    tracing::debug_span!(
        "quickwit_request",
        method = %request.method(),
        path = request.url().path(),
    )
}

async fn send(transport: &dyn Transport, request: Request) -> Result<(String, Response)> {
    let url = request.url().to_string();
    debug!(url = %url, "Sending Quickwit request");
    let method = request.method().clone();
    let response = transport.send(request).await?;

    if !is_success_status(response.status().as_u16()) {
        debug!(
            status = response.status().as_u16(),
            method = %method,
            url = %url,
            headers = ?response.headers(),
            "Quickwit request failed"
        );
    }
    Ok((url, response))
}

async fn api_error(status: u16, url: String, response: Response) -> ClientError {
    let message = match response.bytes().await {
        Ok(body) => error_message(&body),
        Err(e) => {
            warn!(status, url = %url, error = %e, "cannot read error body");
            String::new()
        }
    };
    ClientError::ApiError {
        status,
        url,
        message,
    }
}

/// Envelope text, or the raw body when it is not an envelope.
fn error_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorMessage>(body) {
        Ok(envelope) => envelope.text(),
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| {
        ClientError::InvalidResponse(format!(
            "Failed to parse {}: {}",
            std::any::type_name::<T>(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification_bounds() {
        assert!(!is_success_status(199));
        assert!(is_success_status(200));
        assert!(is_success_status(204));
        assert!(is_success_status(299));
        assert!(!is_success_status(300));
        assert!(!is_success_status(404));
    }

    #[test]
    fn test_error_message_envelope() {
        assert_eq!(
            error_message(br#"{"message":"index `x` not found","error":""}"#),
            "index `x` not found"
        );
        assert_eq!(error_message(br#"{"message":"m","error":"e"}"#), "me");
    }

    #[test]
    fn test_error_message_raw_body() {
        assert_eq!(error_message(b"Route not found"), "Route not found");
        assert_eq!(error_message(b""), "");
    }

    #[test]
    fn test_decode_failure_names_type() {
        let err = decode::<Vec<u32>>(b"{}").unwrap_err();
        match err {
            ClientError::InvalidResponse(msg) => assert!(msg.contains("Vec<u32>")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
