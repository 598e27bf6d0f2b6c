use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::genre::application::output::GenreOutput;
use crate::modules::genre::domain::{GenreFilter, GenreRepository};
use crate::shared::application::use_case::Query;
use crate::shared::domain::repository::{Repository, SortOrder};
use crate::shared::errors::AppResult;

use super::query::ListAllGenresQuery;

pub struct ListAllGenresHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl ListAllGenresHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }
}

#[async_trait]
impl Query<ListAllGenresQuery, Vec<GenreOutput>> for ListAllGenresHandler {
    async fn execute(&self, _query: ListAllGenresQuery) -> AppResult<Vec<GenreOutput>> {
        let genres = self
            .genre_repository
            .ignore_soft_deleted()
            .find_by(&GenreFilter::active(), Some(SortOrder::asc("name")))
            .await?;

        Ok(genres.iter().map(GenreOutput::from).collect())
    }
}
