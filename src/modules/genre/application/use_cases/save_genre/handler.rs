use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryId, CategoryRepository, NestedCategory};
use crate::modules::genre::domain::{Genre, GenreId, GenreProps, GenreRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{not_found_entry, AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::{command::SaveGenreCommand, result::SaveGenreResult};

const ONLY_ACTIVE_IN_RELATED: &str = "genre is the only active genre of a related video";

pub struct SaveGenreHandler {
    genre_repository: Arc<dyn GenreRepository>,
    category_repository: Arc<dyn CategoryRepository>,
}

impl SaveGenreHandler {
    pub fn new(
        genre_repository: Arc<dyn GenreRepository>,
        category_repository: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            genre_repository,
            category_repository,
        }
    }

    /// Snapshots of the requested categories; every unknown or deleted id is reported
    async fn resolve_categories(&self, categories_id: &[String]) -> AppResult<Vec<NestedCategory>> {
        let ids = categories_id
            .iter()
            .map(|id| id.parse::<CategoryId>())
            .collect::<AppResult<Vec<_>>>()?;

        let found = self
            .category_repository
            .ignore_soft_deleted()
            .find_by_ids(&ids)
            .await?;
        if !found.not_exists.is_empty() {
            return Err(AppError::EntityValidation(vec![not_found_entry(
                "categories_id",
                Category::ENTITY_NAME,
                &found.not_exists,
            )]));
        }

        Ok(found.exists.iter().map(NestedCategory::from).collect())
    }

    async fn create_genre(
        &self,
        genre_id: GenreId,
        command: SaveGenreCommand,
        categories: Vec<NestedCategory>,
    ) -> AppResult<SaveGenreResult> {
        let genre = Genre::create(GenreProps {
            genre_id,
            name: command.name,
            categories,
            is_active: command.is_active,
            created_at: command.created_at,
            deleted_at: None,
        });
        if genre.notification().has_errors() {
            return Err(AppError::entity_validation(genre.notification()));
        }

        self.genre_repository.insert(&genre).await?;
        info!("Genre {} created", genre_id);
        Ok(SaveGenreResult::new(genre_id.to_string(), true))
    }

    async fn update_genre(
        &self,
        mut genre: Genre,
        command: SaveGenreCommand,
        categories: Vec<NestedCategory>,
    ) -> AppResult<SaveGenreResult> {
        let was_active = genre.is_active();

        genre.change_name(command.name);
        genre.sync_nested_categories(categories);
        if command.is_active {
            genre.activate();
        } else {
            genre.deactivate();
        }
        genre.change_created_at(command.created_at);

        if was_active
            && !genre.is_active()
            && self
                .genre_repository
                .has_only_one_activate_in_related(genre.genre_id())
                .await?
        {
            genre
                .notification_mut()
                .add_error("is_active", ONLY_ACTIVE_IN_RELATED);
        }
        if genre.notification().has_errors() {
            return Err(AppError::entity_validation(genre.notification()));
        }

        self.genre_repository.update(&genre).await?;
        info!("Genre {} updated", genre.genre_id());
        Ok(SaveGenreResult::new(genre.genre_id().to_string(), false))
    }
}

#[async_trait]
impl UseCase<SaveGenreCommand, SaveGenreResult> for SaveGenreHandler {
    async fn execute(&self, command: SaveGenreCommand) -> AppResult<SaveGenreResult> {
        LogContext::use_case("SaveGenre", &command.genre_id);
        let genre_id: GenreId = command.genre_id.parse()?;
        let categories = self.resolve_categories(&command.categories_id).await?;

        match self.genre_repository.find_by_id(&genre_id).await? {
            Some(genre) => self.update_genre(genre, command, categories).await,
            None => self.create_genre(genre_id, command, categories).await,
        }
    }
}
