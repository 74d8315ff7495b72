//! Source endpoint tests.
//!
//! # Invariants
//! - Source creation sends the config as JSON and returns the stored config
//! - Source deletion addresses the source under its index

mod common;

use common::*;
use quickwit_client::SourceConfig;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};

#[tokio::test]
async fn test_create_pulsar_source() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("sources/source.json");

    Mock::given(method("POST"))
        .and(path("/api/v1/indexes/hdfs-logs/sources"))
        .and(body_json(json!({
            "version": "0.9",
            "source_id": "pulsar-src",
            "source_type": "pulsar",
            "num_pipelines": 1,
            "params": {
                "address": "pulsar://localhost:6650",
                "topics": ["logs"],
                "consumer_name": "quickwit"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SourceConfig::pulsar("pulsar-src", "pulsar://localhost:6650", "", "logs");

    let client = client_for(&mock_server);
    let created = client.create_source("hdfs-logs", &config).await.unwrap();

    assert_eq!(created.id, "pulsar-src");
    assert_eq!(created.source_type, "pulsar");
    assert_eq!(created.num_pipelines, 1);
    assert_eq!(created.params["topics"], json!(["logs"]));
}

#[tokio::test]
async fn test_create_source_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/indexes/hdfs-logs/sources"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "source `pulsar-src` already exists"
        })))
        .mount(&mock_server)
        .await;

    let config = SourceConfig::pulsar("pulsar-src", "pulsar://localhost:6650", "", "logs");

    let client = client_for(&mock_server);
    let err = client.create_source("hdfs-logs", &config).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(
        err.to_string(),
        "quickwit error: 400 - source `pulsar-src` already exists"
    );
}

#[tokio::test]
async fn test_delete_source() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/indexes/hdfs-logs/sources/pulsar-src"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    client
        .delete_source("hdfs-logs", "pulsar-src")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_source_parent_segment_never_reaches_index() {
    let transport = CannedTransport::new(200, "{}");
    let client = client_with(&transport);

    let err = client.delete_source("hdfs-logs", "..").await.unwrap_err();

    assert!(matches!(err, ClientError::InvalidUrl(_)));
    assert!(transport.requests().is_empty());
}
