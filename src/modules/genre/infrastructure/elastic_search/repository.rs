use async_trait::async_trait;
use std::sync::Arc;

use super::mapper::GenreDocumentMapper;
use crate::modules::genre::domain::{GenreId, GenreRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::elastic_search::{
    is_active_entry, is_not_deleted_entry, ElasticSearchRepository, NestedRelation,
};

pub type GenreElasticSearchRepository = ElasticSearchRepository<GenreDocumentMapper>;

#[async_trait]
impl GenreRepository for ElasticSearchRepository<GenreDocumentMapper> {
    fn ignore_soft_deleted(&self) -> Arc<dyn GenreRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn GenreRepository> {
        Arc::new(self.without_scopes())
    }

    async fn has_only_one_activate_in_related(&self, genre_id: &GenreId) -> AppResult<bool> {
        self.has_only_one_in_related(NestedRelation::GENRES, &genre_id.to_string(), is_active_entry)
            .await
    }

    async fn has_only_one_not_deleted_in_related(&self, genre_id: &GenreId) -> AppResult<bool> {
        self.has_only_one_in_related(
            NestedRelation::GENRES,
            &genre_id.to_string(),
            is_not_deleted_entry,
        )
        .await
    }
}
