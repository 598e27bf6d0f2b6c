use async_trait::async_trait;
use log::{debug, warn};
use serde_json::{json, Value};
use std::marker::PhantomData;
use std::sync::Arc;

use super::criteria::SoftDeleteElasticSearchCriteria;
use super::mapper::{
    decode, encode, DocumentMapper, NestedRelation, NestedSnapshot, SearchableDocumentMapper,
};
use super::query::{
    self, exists, field_value, term, BoolQuery, Script, SearchRequest, SearchResponse,
};
use super::store::DocumentStore;
use crate::shared::domain::aggregate::{AggregateRoot, Searchable};
use crate::shared::domain::repository::{
    ensure_ids_not_empty, ExistsResult, FoundEntities, Repository, Scopes, SearchParams,
    SearchResult, SearchableRepository, SortOrder, SOFT_DELETE_SCOPE,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};

/// Upper bound for unpaginated reads (`find_by`, `find_all`)
pub const MAX_RESULT_WINDOW: u64 = 10_000;

/// The store matched more documents than it returned
fn is_truncated(response: &SearchResponse) -> bool {
    response.total > response.hits.len() as u64
}

fn warn_if_truncated(operation: &str, document_type: &str, response: &SearchResponse) {
    if is_truncated(response) {
        warn!(
            "{} on {} matched {} documents but only {} were read (result window {})",
            operation,
            document_type,
            response.total,
            response.hits.len(),
            MAX_RESULT_WINDOW
        );
    }
}

type IdOf<M> = <<M as DocumentMapper>::Entity as AggregateRoot>::Id;

/// Nested entry counts as active: flagged active and not deleted
pub fn is_active_entry(entry: &Value) -> bool {
    entry.get("is_active").and_then(Value::as_bool).unwrap_or(false) && is_not_deleted_entry(entry)
}

pub fn is_not_deleted_entry(entry: &Value) -> bool {
    !entry.get("is_deleted").and_then(Value::as_bool).unwrap_or(false)
}

/// Repository over the shared catalog index for the document kind described by `M`.
///
/// Every query is constrained to `M::DOCUMENT_TYPE` and passed through the
/// scopes of this view before it reaches the store.
pub struct ElasticSearchRepository<M: DocumentMapper> {
    store: Arc<dyn DocumentStore>,
    scopes: Scopes<BoolQuery>,
    mapper: PhantomData<fn() -> M>,
}

impl<M: DocumentMapper> Clone for ElasticSearchRepository<M> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scopes: self.scopes.clone(),
            mapper: PhantomData,
        }
    }
}

impl<M: DocumentMapper> ElasticSearchRepository<M> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            scopes: Scopes::new(),
            mapper: PhantomData,
        }
    }

    pub fn ignoring_soft_deleted(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scopes: self
                .scopes
                .clone()
                .with(SOFT_DELETE_SCOPE, Arc::new(SoftDeleteElasticSearchCriteria)),
            mapper: PhantomData,
        }
    }

    pub fn without_scopes(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            scopes: Scopes::new(),
            mapper: PhantomData,
        }
    }

    pub fn active_scopes(&self) -> Vec<&'static str> {
        self.scopes.names()
    }

    fn typed(&self) -> BoolQuery {
        BoolQuery::new().must(term("type", M::DOCUMENT_TYPE))
    }

    fn scoped(&self, query: BoolQuery) -> Value {
        self.scopes.apply(query).into_query()
    }

    fn ids_query(&self, ids: &[IdOf<M>]) -> Value {
        let ids: Vec<String> = ids.iter().map(ToString::to_string).collect();
        self.scoped(self.typed().must(query::ids(&ids)))
    }

    fn sort_clause(order: &SortOrder) -> Option<Value> {
        M::sort_field(&order.field)
            .map(|field| field_value(field, json!(order.direction.as_str())))
    }

    fn decode_hits(response: SearchResponse) -> AppResult<Vec<M::Entity>> {
        response
            .hits
            .into_iter()
            .map(|hit| decode::<M>(&hit.id, hit.source))
            .collect()
    }

    async fn fetch(&self, request: SearchRequest) -> AppResult<Vec<M::Entity>> {
        Self::decode_hits(self.store.search(request).await?)
    }

    /// Unpaginated read, capped at [`MAX_RESULT_WINDOW`] documents
    async fn fetch_window(
        &self,
        operation: &str,
        request: SearchRequest,
    ) -> AppResult<Vec<M::Entity>> {
        let request = request.size(MAX_RESULT_WINDOW).track_total_hits();
        let response = self.store.search(request).await?;
        warn_if_truncated(operation, M::DOCUMENT_TYPE, &response);
        Self::decode_hits(response)
    }

    /// Copy the snapshot into every document embedding it, deleted ones included
    async fn propagate(&self, snapshot: NestedSnapshot) -> AppResult<u64> {
        let NestedSnapshot {
            relation,
            id,
            fields,
        } = snapshot;
        let query = BoolQuery::new().must(relation.contains(&id)).into_query();
        let script = Script::sync_nested(relation.path, relation.id_field, &id, fields);

        let updated = self.store.update_by_query(query, script).await?;
        debug!(
            "Synced {} '{}' into {} related documents",
            M::DOCUMENT_TYPE,
            id,
            updated
        );
        Ok(updated)
    }

    /// Whether, in any non-deleted document embedding `id` through `relation`,
    /// `id` is the single entry satisfying `predicate`.
    pub async fn has_only_one_in_related(
        &self,
        relation: NestedRelation,
        id: &str,
        predicate: fn(&Value) -> bool,
    ) -> AppResult<bool> {
        let query = BoolQuery::new()
            .must(relation.contains(id))
            .must_not(exists("deleted_at"))
            .into_query();
        let request = SearchRequest::new(query)
            .size(MAX_RESULT_WINDOW)
            .track_total_hits();
        let response = self.store.search(request).await?;
        warn_if_truncated("has_only_one_in_related", relation.path, &response);

        let only_one = response.hits.iter().any(|hit| {
            let entries = match hit.source.get(relation.path).and_then(Value::as_array) {
                Some(entries) => entries,
                None => return false,
            };
            let matching: Vec<&Value> = entries.iter().filter(|entry| predicate(entry)).collect();
            matching.len() == 1
                && matching[0].get(relation.id_field).and_then(Value::as_str) == Some(id)
        });

        Ok(only_one)
    }
}

#[async_trait]
impl<M: DocumentMapper> Repository<M::Entity> for ElasticSearchRepository<M> {
    async fn insert(&self, entity: &M::Entity) -> AppResult<()> {
        let document = encode::<M>(entity)?;
        self.store
            .index_document(&entity.entity_id().to_string(), Value::Object(document))
            .await
    }

    async fn bulk_insert(&self, entities: &[M::Entity]) -> AppResult<()> {
        let timer = TimedOperation::new(&format!("bulk insert {}", M::DOCUMENT_TYPE));
        let documents = entities
            .iter()
            .map(|entity| {
                encode::<M>(entity)
                    .map(|document| (entity.entity_id().to_string(), Value::Object(document)))
            })
            .collect::<AppResult<Vec<_>>>()?;
        self.store.bulk_index(documents).await?;
        timer.finish_with_info(&format!("{} documents", entities.len()));
        Ok(())
    }

    async fn update(&self, entity: &M::Entity) -> AppResult<()> {
        LogContext::store_operation("update", M::DOCUMENT_TYPE, None);
        let document = encode::<M>(entity)?;
        let script = Script::overwrite_fields(&document);
        let query = self.ids_query(std::slice::from_ref(entity.entity_id()));

        let updated = self.store.update_by_query(query, script).await?;
        if updated == 0 {
            return Err(AppError::not_found(
                <M::Entity as AggregateRoot>::ENTITY_NAME,
                &[entity.entity_id()],
            ));
        }

        if let Some(snapshot) = M::nested_snapshot(entity) {
            self.propagate(snapshot).await?;
        }
        Ok(())
    }

    async fn delete(&self, id: &IdOf<M>) -> AppResult<()> {
        let deleted = self
            .store
            .delete_by_query(self.ids_query(std::slice::from_ref(id)))
            .await?;
        if deleted == 0 {
            return Err(AppError::not_found(
                <M::Entity as AggregateRoot>::ENTITY_NAME,
                &[id],
            ));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &IdOf<M>) -> AppResult<Option<M::Entity>> {
        let request = SearchRequest::new(self.ids_query(std::slice::from_ref(id))).size(1);
        Ok(self.fetch(request).await?.into_iter().next())
    }

    async fn find_one_by(
        &self,
        filter: &<M::Entity as AggregateRoot>::Filter,
    ) -> AppResult<Option<M::Entity>> {
        let query = self.scoped(self.typed().must_all(M::filter_clauses(filter)));
        let request = SearchRequest::new(query).size(1);
        Ok(self.fetch(request).await?.into_iter().next())
    }

    async fn find_by(
        &self,
        filter: &<M::Entity as AggregateRoot>::Filter,
        order: Option<SortOrder>,
    ) -> AppResult<Vec<M::Entity>> {
        let query = self.scoped(self.typed().must_all(M::filter_clauses(filter)));
        let sort = order
            .as_ref()
            .and_then(Self::sort_clause)
            .into_iter()
            .collect();
        self.fetch_window("find_by", SearchRequest::new(query).sort(sort))
            .await
    }

    async fn find_all(&self) -> AppResult<Vec<M::Entity>> {
        self.fetch_window("find_all", SearchRequest::new(self.scoped(self.typed())))
            .await
    }

    async fn find_by_ids(&self, ids: &[IdOf<M>]) -> AppResult<FoundEntities<M::Entity>> {
        if ids.is_empty() {
            return Ok(FoundEntities {
                exists: Vec::new(),
                not_exists: Vec::new(),
            });
        }

        let request = SearchRequest::new(self.ids_query(ids)).size(ids.len() as u64);
        let exists = self.fetch(request).await?;
        let not_exists = ids
            .iter()
            .filter(|id| !exists.iter().any(|entity| entity.entity_id() == *id))
            .cloned()
            .collect();

        Ok(FoundEntities { exists, not_exists })
    }

    async fn exists_by_id(&self, ids: &[IdOf<M>]) -> AppResult<ExistsResult<IdOf<M>>> {
        ensure_ids_not_empty(ids)?;

        let request = SearchRequest::new(self.ids_query(ids))
            .size(ids.len() as u64)
            .without_source();
        let response = self.store.search(request).await?;
        let found: Vec<String> = response.hits.into_iter().map(|hit| hit.id).collect();

        let (exists, not_exists): (Vec<IdOf<M>>, Vec<IdOf<M>>) = ids
            .iter()
            .cloned()
            .partition(|id| found.contains(&id.to_string()));

        Ok(ExistsResult { exists, not_exists })
    }
}

#[async_trait]
impl<M> SearchableRepository<M::Entity> for ElasticSearchRepository<M>
where
    M: SearchableDocumentMapper,
    M::Entity: Searchable,
{
    async fn search(
        &self,
        params: &SearchParams<<M::Entity as Searchable>::SearchFilter>,
    ) -> AppResult<SearchResult<M::Entity>> {
        LogContext::search_operation(M::DOCUMENT_TYPE, params.page(), params.per_page(), None);

        let mut query = self.typed();
        if let Some(filter) = params.filter() {
            query = M::search_query(filter, query);
        }
        let sort = params
            .sort_order()
            .and_then(|order| Self::sort_clause(&order))
            .unwrap_or_else(|| field_value("created_at", json!("desc")));

        let request = SearchRequest::new(self.scoped(query))
            .sort(vec![sort])
            .from(params.offset())
            .size(params.per_page())
            .track_total_hits();
        let response = self.store.search(request).await?;

        let items = response
            .hits
            .into_iter()
            .map(|hit| decode::<M>(&hit.id, hit.source))
            .collect::<AppResult<Vec<_>>>()?;

        LogContext::search_operation(
            M::DOCUMENT_TYPE,
            params.page(),
            params.per_page(),
            Some(response.total),
        );
        Ok(SearchResult::new(
            items,
            response.total,
            params.page(),
            params.per_page(),
        ))
    }
}
