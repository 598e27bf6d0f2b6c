use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::domain::{Genre, GenreId, GenreRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::in_memory::InMemoryRepository;

pub type GenreInMemoryRepository = InMemoryRepository<Genre>;

#[async_trait]
impl GenreRepository for InMemoryRepository<Genre> {
    fn ignore_soft_deleted(&self) -> Arc<dyn GenreRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn GenreRepository> {
        Arc::new(self.without_scopes())
    }

    async fn has_only_one_activate_in_related(&self, _genre_id: &GenreId) -> AppResult<bool> {
        Ok(false)
    }

    async fn has_only_one_not_deleted_in_related(&self, _genre_id: &GenreId) -> AppResult<bool> {
        Ok(false)
    }
}
