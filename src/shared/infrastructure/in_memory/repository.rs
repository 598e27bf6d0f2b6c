use async_trait::async_trait;
use std::cmp::Ordering;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::criteria::SoftDeleteInMemoryCriteria;
use crate::shared::domain::aggregate::{AggregateRoot, Searchable};
use crate::shared::domain::repository::{
    ensure_ids_not_empty, ExistsResult, FoundEntities, Repository, Scopes, SearchParams,
    SearchResult, SearchableRepository, SortDirection, SortOrder, SOFT_DELETE_SCOPE,
};
use crate::shared::errors::{AppError, AppResult};

/// Vec-backed repository used as a test double and for local runs.
///
/// Clones share the same storage; scoped views returned by
/// [`InMemoryRepository::ignoring_soft_deleted`] only differ in the criteria
/// they apply when reading.
pub struct InMemoryRepository<E: AggregateRoot> {
    items: Arc<RwLock<Vec<E>>>,
    scopes: Scopes<Vec<E>>,
}

impl<E: AggregateRoot> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            scopes: self.scopes.clone(),
        }
    }
}

impl<E: AggregateRoot> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: AggregateRoot> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            scopes: Scopes::new(),
        }
    }

    /// Raw storage, scopes not applied
    pub async fn items(&self) -> Vec<E> {
        self.items.read().await.clone()
    }

    /// Seed the storage, dropping whatever it held
    pub async fn replace_items(&self, items: Vec<E>) {
        *self.items.write().await = items;
    }

    pub fn ignoring_soft_deleted(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            scopes: self
                .scopes
                .clone()
                .with(SOFT_DELETE_SCOPE, Arc::new(SoftDeleteInMemoryCriteria)),
        }
    }

    pub fn without_scopes(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            scopes: Scopes::new(),
        }
    }

    pub fn active_scopes(&self) -> Vec<&'static str> {
        self.scopes.names()
    }

    async fn scoped_items(&self) -> Vec<E> {
        let items = self.items.read().await.clone();
        self.scopes.apply(items)
    }

    fn not_found(id: &impl Display) -> AppError {
        AppError::not_found(E::ENTITY_NAME, &[id])
    }

    fn sort(items: &mut [E], order: &SortOrder) {
        items.sort_by(|a, b| {
            let ordering = a.compare_by(b, &order.field).unwrap_or(Ordering::Equal);
            match order.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
}

#[async_trait]
impl<E: AggregateRoot> Repository<E> for InMemoryRepository<E> {
    async fn insert(&self, entity: &E) -> AppResult<()> {
        self.items.write().await.push(entity.clone());
        Ok(())
    }

    async fn bulk_insert(&self, entities: &[E]) -> AppResult<()> {
        self.items.write().await.extend_from_slice(entities);
        Ok(())
    }

    async fn update(&self, entity: &E) -> AppResult<()> {
        let id = entity.entity_id();
        let visible = self.scoped_items().await;
        if !visible.iter().any(|item| item.entity_id() == id) {
            return Err(Self::not_found(id));
        }

        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.entity_id() == id) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(())
            }
            None => Err(Self::not_found(id)),
        }
    }

    async fn delete(&self, id: &E::Id) -> AppResult<()> {
        let visible = self.scoped_items().await;
        if !visible.iter().any(|item| item.entity_id() == id) {
            return Err(Self::not_found(id));
        }

        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.entity_id() != id);
        if items.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &E::Id) -> AppResult<Option<E>> {
        Ok(self
            .scoped_items()
            .await
            .into_iter()
            .find(|item| item.entity_id() == id))
    }

    async fn find_one_by(&self, filter: &E::Filter) -> AppResult<Option<E>> {
        Ok(self
            .scoped_items()
            .await
            .into_iter()
            .find(|item| item.matches(filter)))
    }

    async fn find_by(&self, filter: &E::Filter, order: Option<SortOrder>) -> AppResult<Vec<E>> {
        let mut items: Vec<E> = self
            .scoped_items()
            .await
            .into_iter()
            .filter(|item| item.matches(filter))
            .collect();
        if let Some(order) = order {
            Self::sort(&mut items, &order);
        }
        Ok(items)
    }

    async fn find_all(&self) -> AppResult<Vec<E>> {
        Ok(self.scoped_items().await)
    }

    async fn find_by_ids(&self, ids: &[E::Id]) -> AppResult<FoundEntities<E>> {
        let items = self.scoped_items().await;
        let exists: Vec<E> = items
            .into_iter()
            .filter(|item| ids.contains(item.entity_id()))
            .collect();
        let not_exists = ids
            .iter()
            .filter(|id| !exists.iter().any(|item| item.entity_id() == *id))
            .cloned()
            .collect();

        Ok(FoundEntities { exists, not_exists })
    }

    async fn exists_by_id(&self, ids: &[E::Id]) -> AppResult<ExistsResult<E::Id>> {
        ensure_ids_not_empty(ids)?;

        let items = self.scoped_items().await;
        let (exists, not_exists): (Vec<E::Id>, Vec<E::Id>) = ids
            .iter()
            .cloned()
            .partition(|id| items.iter().any(|item| item.entity_id() == id));

        Ok(ExistsResult { exists, not_exists })
    }
}

#[async_trait]
impl<E: Searchable> SearchableRepository<E> for InMemoryRepository<E> {
    async fn search(&self, params: &SearchParams<E::SearchFilter>) -> AppResult<SearchResult<E>> {
        let mut items = self.scoped_items().await;
        if let Some(filter) = params.filter() {
            items.retain(|item| item.matches_search(filter));
        }

        let order = params
            .sort_order()
            .filter(|order| E::SORTABLE_FIELDS.contains(&order.field.as_str()))
            .unwrap_or_else(SortOrder::newest_first);
        Self::sort(&mut items, &order);

        let total = items.len() as u64;
        let page = items
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.per_page() as usize)
            .collect();

        Ok(SearchResult::new(page, total, params.page(), params.per_page()))
    }
}
