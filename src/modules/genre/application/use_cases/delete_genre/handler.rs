use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::genre::domain::{Genre, GenreId, GenreRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::command::DeleteGenreCommand;

const ONLY_NOT_DELETED_IN_RELATED: &str = "genre is the only genre of a related video";

pub struct DeleteGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
}

impl DeleteGenreHandler {
    pub fn new(genre_repository: Arc<dyn GenreRepository>) -> Self {
        Self { genre_repository }
    }
}

#[async_trait]
impl UseCase<DeleteGenreCommand, ()> for DeleteGenreHandler {
    async fn execute(&self, command: DeleteGenreCommand) -> AppResult<()> {
        LogContext::use_case("DeleteGenre", &command.id);
        let genre_id: GenreId = command.id.parse()?;

        let mut genre = self
            .genre_repository
            .find_by_id(&genre_id)
            .await?
            .ok_or_else(|| AppError::not_found(Genre::ENTITY_NAME, &[genre_id]))?;

        if !genre.is_deleted()
            && self
                .genre_repository
                .has_only_one_not_deleted_in_related(&genre_id)
                .await?
        {
            genre
                .notification_mut()
                .add_error("id", ONLY_NOT_DELETED_IN_RELATED);
            return Err(AppError::entity_validation(genre.notification()));
        }

        genre.mark_as_deleted();
        self.genre_repository.update(&genre).await?;
        info!("Genre {} soft deleted", genre_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::{CategoryId, NestedCategory};
    use crate::modules::genre::domain::GenreProps;
    use crate::modules::genre::infrastructure::GenreElasticSearchRepository;
    use crate::modules::genre::infrastructure::GenreInMemoryRepository;
    use crate::shared::infrastructure::elastic_search::query::{SearchHit, SearchResponse};
    use crate::shared::infrastructure::elastic_search::store::MockDocumentStore;
    use serde_json::json;

    fn genre() -> Genre {
        let category = NestedCategory::create(CategoryId::new(), "Movie", true, None);
        Genre::create(GenreProps::new("Action", vec![category]))
    }

    #[tokio::test]
    async fn soft_deletes_genre() {
        let genre = genre();
        let id = genre.genre_id().to_string();
        let repository = GenreInMemoryRepository::with_items(vec![genre]);

        DeleteGenreHandler::new(Arc::new(repository.clone()))
            .execute(DeleteGenreCommand::new(id))
            .await
            .unwrap();

        assert!(repository.items().await[0].is_deleted());
    }

    #[tokio::test]
    async fn refuses_to_delete_the_last_genre_of_a_video() {
        let genre = genre();
        let genre_id = genre.genre_id().to_string();
        let genre_hit = SearchHit::new(
            genre_id.clone(),
            json!({
                "genre_name": "Action",
                "categories": [{
                    "category_id": CategoryId::new().to_string(),
                    "category_name": "Movie",
                    "is_active": true,
                    "deleted_at": null,
                    "is_deleted": false
                }],
                "is_active": true,
                "created_at": "2024-05-01T10:00:00Z",
                "deleted_at": null,
                "type": "Genre"
            }),
        );
        let video_hit = SearchHit::new(
            "video",
            json!({
                "video_title": "Movie",
                "genres": [{
                    "genre_id": genre_id.clone(),
                    "genre_name": "Action",
                    "is_active": true,
                    "deleted_at": null,
                    "is_deleted": false
                }],
                "type": "Video"
            }),
        );

        let mut store = MockDocumentStore::new();
        store
            .expect_search()
            .withf(|request| request.query.to_string().contains("\"ids\""))
            .returning(move |_| {
                Ok(SearchResponse {
                    total: 1,
                    hits: vec![genre_hit.clone()],
                })
            });
        store
            .expect_search()
            .withf(|request| request.query.to_string().contains("genres.genre_id"))
            .returning(move |_| {
                Ok(SearchResponse {
                    total: 1,
                    hits: vec![video_hit.clone()],
                })
            });
        let repository = GenreElasticSearchRepository::new(Arc::new(store));

        let error = DeleteGenreHandler::new(Arc::new(repository))
            .execute(DeleteGenreCommand::new(genre_id))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::EntityValidation(_)));
    }
}
