use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::search::{SearchParams, SearchResult};
use crate::shared::domain::aggregate::{AggregateRoot, Searchable};
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Lenient parse: anything other than `desc` is ascending
    pub fn parse_lenient(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder {
    pub field: String,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Default ordering for listings: newest first
    pub fn newest_first() -> Self {
        Self::desc("created_at")
    }
}

/// Outcome of `find_by_ids`
#[derive(Debug, Clone)]
pub struct FoundEntities<E: AggregateRoot> {
    pub exists: Vec<E>,
    pub not_exists: Vec<E::Id>,
}

/// Outcome of `exists_by_id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistsResult<Id> {
    pub exists: Vec<Id>,
    pub not_exists: Vec<Id>,
}

pub fn ensure_ids_not_empty<Id>(ids: &[Id]) -> AppResult<()> {
    if ids.is_empty() {
        return Err(AppError::InvalidArgument(
            "ids must be an array with at least one element".to_string(),
        ));
    }
    Ok(())
}

/// Persistence contract shared by every aggregate store.
///
/// Reads, and the lookups behind `update`/`delete`, honour the scopes of the
/// repository view they are called on.
#[async_trait]
pub trait Repository<E: AggregateRoot>: Send + Sync {
    async fn insert(&self, entity: &E) -> AppResult<()>;
    async fn bulk_insert(&self, entities: &[E]) -> AppResult<()>;
    async fn update(&self, entity: &E) -> AppResult<()>;
    async fn delete(&self, id: &E::Id) -> AppResult<()>;

    async fn find_by_id(&self, id: &E::Id) -> AppResult<Option<E>>;
    async fn find_one_by(&self, filter: &E::Filter) -> AppResult<Option<E>>;
    async fn find_by(&self, filter: &E::Filter, order: Option<SortOrder>) -> AppResult<Vec<E>>;
    async fn find_all(&self) -> AppResult<Vec<E>>;
    async fn find_by_ids(&self, ids: &[E::Id]) -> AppResult<FoundEntities<E>>;
    async fn exists_by_id(&self, ids: &[E::Id]) -> AppResult<ExistsResult<E::Id>>;
}

#[async_trait]
pub trait SearchableRepository<E: Searchable>: Repository<E> {
    async fn search(&self, params: &SearchParams<E::SearchFilter>) -> AppResult<SearchResult<E>>;
}
