use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::output::GenreOutput;
use crate::modules::genre::domain::{Genre, GenreFilter, GenreId, GenreRepository};
use crate::shared::application::use_case::Query;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};

use super::query::GetGenreQuery;

pub struct GetGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl GetGenreHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }
}

#[async_trait]
impl Query<GetGenreQuery, GenreOutput> for GetGenreHandler {
    async fn execute(&self, query: GetGenreQuery) -> AppResult<GenreOutput> {
        let genre_id: GenreId = query.id.parse()?;

        self.genre_repository
            .ignore_soft_deleted()
            .find_one_by(&GenreFilter::active_by_id(genre_id))
            .await?
            .map(|genre| GenreOutput::from(&genre))
            .ok_or_else(|| AppError::not_found(Genre::ENTITY_NAME, &[genre_id]))
    }
}
