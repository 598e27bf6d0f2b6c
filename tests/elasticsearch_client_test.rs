//! Search engine client tests
//!
//! Exercises the REST client against a local mock server.

use serde_json::json;
use video_catalog::shared::config::ElasticsearchConfig;
use video_catalog::shared::infrastructure::elastic_search::query::{SearchRequest, Script};
use video_catalog::shared::infrastructure::elastic_search::{RetryConfig, mapping};
use video_catalog::shared::infrastructure::{DocumentStore, ElasticsearchClient};
use video_catalog::shared::AppError;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ElasticsearchClient {
    let config = ElasticsearchConfig::new(server.uri(), "catalog").unwrap();
    ElasticsearchClient::new(&config)
        .unwrap()
        .with_retry_config(RetryConfig::immediate(2))
}

#[tokio::test]
async fn test_search_parses_hits_and_total() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/_search"))
        .and(body_partial_json(json!({ "size": 2, "track_total_hits": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hits": {
                "total": { "value": 7, "relation": "eq" },
                "hits": [
                    { "_id": "a", "_source": { "category_name": "Movie" } },
                    { "_id": "b", "_source": { "category_name": "Series" } }
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    let response = client
        .search(
            SearchRequest::new(json!({ "match_all": {} }))
                .size(2)
                .track_total_hits(),
        )
        .await
        .unwrap();

    assert_eq!(response.total, 7);
    assert_eq!(response.hits.len(), 2);
    assert_eq!(response.hits[1].id, "b");
    assert_eq!(response.hits[1].source["category_name"], "Series");
}

#[tokio::test]
async fn test_update_by_query_returns_updated_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/_update_by_query"))
        .and(query_param("refresh", "true"))
        .and(query_param("conflicts", "proceed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "updated": 3 })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let updated = client
        .update_by_query(
            json!({ "ids": { "values": ["a"] } }),
            Script::painless("ctx._source.is_active = false", Default::default()),
        )
        .await
        .unwrap();

    assert_eq!(updated, 3);
}

#[tokio::test]
async fn test_bulk_reports_item_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/_bulk"))
        .and(header("content-type", "application/x-ndjson"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": true,
            "items": [
                { "index": { "_id": "a", "status": 201 } },
                { "index": { "_id": "b", "status": 400, "error": { "reason": "mapper_parsing_exception" } } }
            ]
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client
        .bulk_index(vec![
            ("a".to_string(), json!({ "category_name": "Movie" })),
            ("b".to_string(), json!({ "category_name": 42 })),
        ])
        .await;

    assert_eq!(
        result,
        Err(AppError::StoreError(
            "bulk failed: mapper_parsing_exception".to_string()
        ))
    );
}

#[tokio::test]
async fn test_transient_failures_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalog/_delete_by_query"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/catalog/_delete_by_query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deleted": 1 })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let deleted = client
        .delete_by_query(json!({ "ids": { "values": ["a"] } }))
        .await
        .unwrap();

    assert_eq!(deleted, 1);
}

#[tokio::test]
async fn test_engine_errors_carry_the_reason() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/catalog/_doc/a"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "type": "mapper_parsing_exception", "reason": "failed to parse field [duration]" },
            "status": 400
        })))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let error = client
        .index_document("a", json!({ "duration": "long" }))
        .await
        .unwrap_err();

    assert_eq!(
        error,
        AppError::StoreError(
            "index failed (400 Bad Request): failed to parse field [duration]".to_string()
        )
    );
}

#[tokio::test]
async fn test_index_bootstrap() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/catalog"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/catalog"))
        .and(body_partial_json(json!({
            "mappings": { "properties": { "categories": { "type": "nested" } } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "acknowledged": true })))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    assert!(!client.index_exists().await.unwrap());
    client.create_index(mapping::index_body()).await.unwrap();
}
