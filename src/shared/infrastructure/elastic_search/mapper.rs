use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::str::FromStr;

use super::query::{nested, term, BoolQuery};
use crate::shared::domain::aggregate::{AggregateRoot, Searchable};
use crate::shared::domain::notification::{ErrorEntry, Notification};
use crate::shared::errors::{AppError, AppResult};

/// Array of snapshots embedded in genre and video documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedRelation {
    pub path: &'static str,
    pub id_field: &'static str,
}

impl NestedRelation {
    pub const CATEGORIES: Self = Self {
        path: "categories",
        id_field: "category_id",
    };
    pub const GENRES: Self = Self {
        path: "genres",
        id_field: "genre_id",
    };
    pub const CAST_MEMBERS: Self = Self {
        path: "cast_members",
        id_field: "cast_member_id",
    };

    pub fn id_path(&self) -> String {
        format!("{}.{}", self.path, self.id_field)
    }

    /// Matches documents embedding `id` in this relation
    pub fn contains(&self, id: &str) -> Value {
        nested(self.path, term(&self.id_path(), id))
    }

    pub fn contains_any(&self, ids: Vec<Value>) -> Value {
        nested(self.path, super::query::terms(&self.id_path(), ids))
    }
}

/// New state of an aggregate to copy into every document embedding it
#[derive(Debug, Clone, PartialEq)]
pub struct NestedSnapshot {
    pub relation: NestedRelation,
    pub id: String,
    pub fields: Map<String, Value>,
}

/// Translation between an aggregate and its stored document
pub trait DocumentMapper: Send + Sync + 'static {
    type Entity: AggregateRoot;
    type Document: Serialize + DeserializeOwned;

    /// Value of the `type` field of every document of this kind
    const DOCUMENT_TYPE: &'static str;

    fn to_document(entity: &Self::Entity) -> Self::Document;

    /// Rebuild and validate the aggregate, `LoadEntity` when invalid
    fn to_entity(id: &str, document: Self::Document) -> AppResult<Self::Entity>;

    /// Query clauses equivalent to the in-memory find filter
    fn filter_clauses(filter: &<Self::Entity as AggregateRoot>::Filter) -> Vec<Value>;

    /// Document field backing a sortable aggregate field
    fn sort_field(field: &str) -> Option<&'static str>;

    /// Snapshot to propagate into parent documents after an update
    fn nested_snapshot(_entity: &Self::Entity) -> Option<NestedSnapshot> {
        None
    }
}

pub trait SearchableDocumentMapper: DocumentMapper
where
    Self::Entity: Searchable,
{
    fn search_query(
        filter: &<Self::Entity as Searchable>::SearchFilter,
        query: BoolQuery,
    ) -> BoolQuery;
}

pub fn encode<M: DocumentMapper>(entity: &M::Entity) -> AppResult<Map<String, Value>> {
    match serde_json::to_value(M::to_document(entity))? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::SerializationError(format!(
            "{} document must be an object, got {}",
            M::DOCUMENT_TYPE,
            other
        ))),
    }
}

pub fn decode<M: DocumentMapper>(id: &str, source: Value) -> AppResult<M::Entity> {
    if source.get("type").and_then(Value::as_str) != Some(M::DOCUMENT_TYPE) {
        return Err(AppError::LoadEntity(vec![ErrorEntry::message(
            "Invalid document type",
        )]));
    }

    let document: M::Document = serde_json::from_value(source).map_err(|e| {
        AppError::LoadEntity(vec![ErrorEntry::message(format!(
            "Malformed {} document {}: {}",
            M::DOCUMENT_TYPE,
            id,
            e
        ))])
    })?;
    M::to_entity(id, document)
}

/// Fail with every error collected while loading plus those of the rebuilt aggregate.
///
/// Loaders substitute placeholder values for fields they could not convert, so
/// `entity` is only returned when nothing at all was recorded.
pub fn ensure_loadable<E: AggregateRoot>(entity: E, mut errors: Notification) -> AppResult<E> {
    errors.copy_errors(entity.notification());
    if errors.has_errors() {
        return Err(AppError::LoadEntity(errors.into_errors()));
    }
    Ok(entity)
}

/// Parse an id read from a document, recording a failure under `field`
pub fn parse_document_id<I: FromStr + Default>(
    field: &str,
    raw: &str,
    errors: &mut Notification,
) -> I {
    raw.parse().unwrap_or_else(|_| {
        errors.add_error(field, format!("{} must be a valid UUID", field));
        I::default()
    })
}
