use async_trait::async_trait;
use std::sync::Arc;

use super::genre::{Genre, GenreId};
use crate::shared::domain::repository::Repository;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait GenreRepository: Repository<Genre> {
    fn ignore_soft_deleted(&self) -> Arc<dyn GenreRepository>;
    fn clear_scopes(&self) -> Arc<dyn GenreRepository>;

    /// Whether the genre is the only active one of some non-deleted video
    async fn has_only_one_activate_in_related(&self, genre_id: &GenreId) -> AppResult<bool>;

    /// Whether the genre is the only non-deleted one of some non-deleted video
    async fn has_only_one_not_deleted_in_related(&self, genre_id: &GenreId) -> AppResult<bool>;
}
