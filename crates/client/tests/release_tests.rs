//! Response body release tests.
//!
//! # Invariants
//! - The response body is released exactly once per call, on success,
//!   remote error and decode error, for every decode flavor

mod common;

use common::*;

#[tokio::test]
async fn test_released_on_value_success() {
    let transport = CannedTransport::new(200, load_fixture("indexes/index.json").to_string());
    let client = client_with(&transport);

    client.get_index("hdfs-logs").await.unwrap();
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_on_value_remote_error() {
    let transport = CannedTransport::new(404, r#"{"message":"not found"}"#);
    let client = client_with(&transport);

    client.get_index("hdfs-logs").await.unwrap_err();
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_on_value_decode_error() {
    let transport = CannedTransport::new(200, "not json");
    let client = client_with(&transport);

    let err = client.describe_index("hdfs-logs").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_on_list_success() {
    let transport = CannedTransport::new(
        200,
        load_fixture("indexes/list_indexes.json").to_string(),
    );
    let client = client_with(&transport);

    let indexes = client.list_indexes().await.unwrap();
    assert_eq!(indexes.len(), 2);
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_on_list_remote_error() {
    let transport = CannedTransport::new(503, "unavailable");
    let client = client_with(&transport);

    client.list_indexes().await.unwrap_err();
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_on_list_decode_error() {
    let transport = CannedTransport::new(200, "{}");
    let client = client_with(&transport);

    client.list_indexes().await.unwrap_err();
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_on_no_content_success() {
    let transport = CannedTransport::new(200, r#"[{"split_id":"a"}]"#);
    let client = client_with(&transport);

    client.delete_index("hdfs-logs").await.unwrap();
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_on_no_content_remote_error() {
    let transport = CannedTransport::new(400, r#"{"message":"m","error":"e"}"#);
    let client = client_with(&transport);

    client.delete_source("hdfs-logs", "src").await.unwrap_err();
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_released_when_error_body_unreadable() {
    let transport = CannedTransport::with_unreadable_body(500);
    let client = client_with(&transport);

    client.clear_index("hdfs-logs").await.unwrap_err();
    assert_eq!(transport.releases(), 1);
}

#[tokio::test]
async fn test_one_release_per_call() {
    let transport = CannedTransport::new(200, "{}");
    let client = client_with(&transport);

    for _ in 0..3 {
        client.get_cluster().await.unwrap();
    }
    assert_eq!(transport.releases(), 3);
    assert_eq!(transport.requests().len(), 3);
}
