use async_trait::async_trait;
use serde_json::Value;

use super::query::{Script, SearchRequest, SearchResponse};
use crate::shared::errors::AppResult;

/// Operations the repositories need from the search engine, bound to one index.
///
/// Writes are refreshed immediately so that subsequent reads observe them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn index_document(&self, id: &str, document: Value) -> AppResult<()>;

    /// Index many documents in a single request
    async fn bulk_index(&self, documents: Vec<(String, Value)>) -> AppResult<()>;

    async fn search(&self, request: SearchRequest) -> AppResult<SearchResponse>;

    /// Number of updated documents
    async fn update_by_query(&self, query: Value, script: Script) -> AppResult<u64>;

    /// Number of deleted documents
    async fn delete_by_query(&self, query: Value) -> AppResult<u64>;

    async fn index_exists(&self) -> AppResult<bool>;

    async fn create_index(&self, body: Value) -> AppResult<()>;

    async fn delete_index(&self) -> AppResult<()>;
}
