use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

use super::query::{Script, SearchHit, SearchRequest, SearchResponse};
use super::retry::{RetryConfig, RetryUtil};
use super::store::DocumentStore;
use crate::shared::config::ElasticsearchConfig;
use crate::shared::errors::{AppError, AppResult};

const REFRESH: &str = "refresh=true";

#[derive(Debug, Clone)]
enum RequestBody {
    Empty,
    Json(Value),
    NdJson(String),
}

#[derive(Debug, Deserialize)]
struct RawSearchResponse {
    hits: RawHits,
}

#[derive(Debug, Deserialize)]
struct RawHits {
    #[serde(default)]
    total: Option<RawTotal>,
    #[serde(default)]
    hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTotal {
    Object { value: u64 },
    Count(u64),
}

#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "_source", default)]
    source: Value,
}

/// REST client for the search engine, bound to one index
pub struct ElasticsearchClient {
    client: reqwest::Client,
    node: String,
    index: String,
    credentials: Option<(String, Option<String>)>,
    retry: RetryConfig,
}

impl ElasticsearchClient {
    pub fn new(config: &ElasticsearchConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("video-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            node: config.node.trim_end_matches('/').to_string(),
            index: config.index.clone(),
            credentials: config
                .username
                .clone()
                .map(|username| (username, config.password.clone())),
            retry: RetryConfig::with_max_retries(config.max_retries),
        })
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.node, path)
    }

    fn request(&self, method: Method, url: &str, body: &RequestBody) -> RequestBuilder {
        let mut builder = self.client.request(method, url);
        if let Some((username, password)) = &self.credentials {
            builder = builder.basic_auth(username, password.as_ref());
        }
        match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(value),
            RequestBody::NdJson(text) => builder
                .header(CONTENT_TYPE, "application/x-ndjson")
                .body(text.clone()),
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        operation: &str,
    ) -> AppResult<Response> {
        let url = self.url(path);
        let started = Instant::now();
        debug!("Search engine: {} {} ({})", method, url, operation);

        let response = RetryUtil::retry_http_request(
            || self.request(method.clone(), &url, &body).send(),
            &self.retry,
            operation,
        )
        .await?;

        debug!(
            "Search engine: {} answered {} in {}ms",
            operation,
            response.status(),
            started.elapsed().as_millis()
        );
        Ok(response)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        operation: &str,
    ) -> AppResult<Value> {
        let response = self.execute(method, path, body, operation).await?;
        Self::read_body(response, operation).await
    }

    async fn read_body(response: Response, operation: &str) -> AppResult<Value> {
        let status = response.status();
        let text = response.text().await.map_err(|e| {
            AppError::ApiError(format!("Failed to read {} response: {}", operation, e))
        })?;

        if !status.is_success() {
            let reason = Self::error_reason(&text);
            warn!("Search engine: {} failed with {}: {}", operation, status, reason);
            return Err(match status {
                StatusCode::NOT_FOUND => {
                    AppError::NotFound(format!("{} failed: {}", operation, reason))
                }
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    AppError::Unauthorized(format!("{} refused: {}", operation, reason))
                }
                _ => AppError::StoreError(format!("{} failed ({}): {}", operation, status, reason)),
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn error_reason(body: &str) -> String {
        serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .pointer("/error/reason")
                    .or_else(|| value.get("error"))
                    .map(|reason| match reason {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
            })
            .unwrap_or_else(|| body.to_string())
    }

    fn bulk_body(&self, documents: &[(String, Value)]) -> String {
        let mut body = String::new();
        for (id, document) in documents {
            body.push_str(&json!({ "index": { "_index": self.index, "_id": id } }).to_string());
            body.push('\n');
            body.push_str(&document.to_string());
            body.push('\n');
        }
        body
    }

    fn counter(body: &Value, field: &str) -> u64 {
        body.get(field).and_then(Value::as_u64).unwrap_or(0)
    }
}

#[async_trait]
impl DocumentStore for ElasticsearchClient {
    async fn index_document(&self, id: &str, document: Value) -> AppResult<()> {
        let path = format!("{}/_doc/{}?{}", self.index, id, REFRESH);
        self.send(Method::PUT, &path, RequestBody::Json(document), "index")
            .await?;
        Ok(())
    }

    async fn bulk_index(&self, documents: Vec<(String, Value)>) -> AppResult<()> {
        if documents.is_empty() {
            return Ok(());
        }

        let path = format!("_bulk?{}", REFRESH);
        let body = RequestBody::NdJson(self.bulk_body(&documents));
        let response = self.send(Method::POST, &path, body, "bulk").await?;

        if response.get("errors").and_then(Value::as_bool).unwrap_or(false) {
            let reason = response
                .get("items")
                .and_then(Value::as_array)
                .and_then(|items| {
                    items
                        .iter()
                        .find_map(|item| item.pointer("/index/error/reason").cloned())
                })
                .map(|reason| reason.as_str().map(str::to_string).unwrap_or_else(|| reason.to_string()))
                .unwrap_or_else(|| "unknown bulk failure".to_string());
            return Err(AppError::StoreError(format!("bulk failed: {}", reason)));
        }

        info!("Search engine: bulk indexed {} documents", documents.len());
        Ok(())
    }

    async fn search(&self, request: SearchRequest) -> AppResult<SearchResponse> {
        let path = format!("{}/_search", self.index);
        let body = RequestBody::Json(serde_json::to_value(&request)?);
        let response = self.send(Method::POST, &path, body, "search").await?;

        let raw: RawSearchResponse = serde_json::from_value(response)?;
        let hits: Vec<SearchHit> = raw
            .hits
            .hits
            .into_iter()
            .map(|hit| SearchHit::new(hit.id, hit.source))
            .collect();
        let total = match raw.hits.total {
            Some(RawTotal::Object { value }) | Some(RawTotal::Count(value)) => value,
            None => hits.len() as u64,
        };

        Ok(SearchResponse { total, hits })
    }

    async fn update_by_query(&self, query: Value, script: Script) -> AppResult<u64> {
        let path = format!("{}/_update_by_query?{}&conflicts=proceed", self.index, REFRESH);
        let body = RequestBody::Json(json!({ "query": query, "script": script }));
        let response = self.send(Method::POST, &path, body, "update_by_query").await?;
        Ok(Self::counter(&response, "updated"))
    }

    async fn delete_by_query(&self, query: Value) -> AppResult<u64> {
        let path = format!("{}/_delete_by_query?{}", self.index, REFRESH);
        let body = RequestBody::Json(json!({ "query": query }));
        let response = self.send(Method::POST, &path, body, "delete_by_query").await?;
        Ok(Self::counter(&response, "deleted"))
    }

    async fn index_exists(&self) -> AppResult<bool> {
        let response = self
            .execute(Method::HEAD, &self.index, RequestBody::Empty, "index_exists")
            .await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(RetryUtil::status_to_app_error(status)),
        }
    }

    async fn create_index(&self, body: Value) -> AppResult<()> {
        self.send(Method::PUT, &self.index, RequestBody::Json(body), "create_index")
            .await?;
        info!("Search engine: created index '{}'", self.index);
        Ok(())
    }

    async fn delete_index(&self) -> AppResult<()> {
        self.send(Method::DELETE, &self.index, RequestBody::Empty, "delete_index")
            .await?;
        info!("Search engine: deleted index '{}'", self.index);
        Ok(())
    }
}
