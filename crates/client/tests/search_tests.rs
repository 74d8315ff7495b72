//! Search endpoint tests.
//!
//! # Invariants
//! - The query is sent unmodified in the `query` parameter
//! - Hits are returned as raw JSON documents

mod common;

use common::*;
use serde::Deserialize;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};

#[derive(Debug, Deserialize)]
struct LogLine {
    severity_text: String,
    body: String,
}

#[tokio::test]
async fn test_search() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("search/search.json");

    Mock::given(method("GET"))
        .and(path("/api/v1/hdfs-logs/search"))
        .and(query_param("query", "severity_text:ERROR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .search("hdfs-logs", "severity_text:ERROR")
        .await
        .unwrap();

    assert_eq!(response.num_hits, 2);
    assert_eq!(response.elapsed_time_micros, 2418);
    assert_eq!(response.hits.len(), 2);

    let lines: Vec<LogLine> = response.hits_as().unwrap();
    assert!(lines.iter().all(|l| l.severity_text == "ERROR"));
    assert!(lines[0].body.contains("Connection reset"));
}

#[tokio::test]
async fn test_search_pre_encoded_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/hdfs-logs/search"))
        .and(query_param("query", "body:error AND resource.service:datanode"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "num_hits": 0, "hits": [], "elapsed_time_micros": 12
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client
        .search("hdfs-logs", "body:error%20AND%20resource.service:datanode")
        .await
        .unwrap();

    assert_eq!(response.num_hits, 0);
    assert!(response.hits.is_empty());
}

#[tokio::test]
async fn test_search_invalid_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/hdfs-logs/search"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "failed to parse query: `severity_text:`"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.search("hdfs-logs", "severity_text:").await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "failed to parse query: `severity_text:`");
        }
        other => panic!("Expected ApiError, got {:?}", other),
    }
}
