use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryId, CategoryProps, CategoryRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::{command::SaveCategoryCommand, result::SaveCategoryResult};

const ONLY_ACTIVE_IN_RELATED: &str =
    "category is the only active category of a related genre or video";

/// Creates the category when its id is unknown, otherwise overwrites it
pub struct SaveCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl SaveCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }

    async fn create_category(
        &self,
        category_id: CategoryId,
        command: SaveCategoryCommand,
    ) -> AppResult<SaveCategoryResult> {
        let category = Category::create(CategoryProps {
            category_id,
            name: command.name,
            description: command.description,
            is_active: command.is_active,
            created_at: command.created_at,
            deleted_at: None,
        });
        if category.notification().has_errors() {
            return Err(AppError::entity_validation(category.notification()));
        }

        self.category_repository.insert(&category).await?;
        info!("Category {} created", category_id);
        Ok(SaveCategoryResult::new(category_id.to_string(), true))
    }

    async fn update_category(
        &self,
        mut category: Category,
        command: SaveCategoryCommand,
    ) -> AppResult<SaveCategoryResult> {
        let was_active = category.is_active();

        category.change_name(command.name);
        category.change_description(command.description);
        if command.is_active {
            category.activate();
        } else {
            category.deactivate();
        }
        category.change_created_at(command.created_at);

        if was_active
            && !category.is_active()
            && self
                .category_repository
                .has_only_one_activate_in_related(category.category_id())
                .await?
        {
            category
                .notification_mut()
                .add_error("is_active", ONLY_ACTIVE_IN_RELATED);
        }
        if category.notification().has_errors() {
            return Err(AppError::entity_validation(category.notification()));
        }

        self.category_repository.update(&category).await?;
        info!("Category {} updated", category.category_id());
        Ok(SaveCategoryResult::new(
            category.category_id().to_string(),
            false,
        ))
    }
}

#[async_trait]
impl UseCase<SaveCategoryCommand, SaveCategoryResult> for SaveCategoryHandler {
    async fn execute(&self, command: SaveCategoryCommand) -> AppResult<SaveCategoryResult> {
        LogContext::use_case("SaveCategory", &command.id);
        let category_id: CategoryId = command.id.parse()?;

        match self.category_repository.find_by_id(&category_id).await? {
            Some(category) => self.update_category(category, command).await,
            None => self.create_category(category_id, command).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::infrastructure::{
        CategoryElasticSearchRepository, CategoryInMemoryRepository,
    };
    use crate::shared::domain::notification::ErrorEntry;
    use crate::shared::infrastructure::elastic_search::query::{SearchHit, SearchResponse};
    use crate::shared::infrastructure::elastic_search::store::MockDocumentStore;
    use serde_json::json;

    #[tokio::test]
    async fn creates_unknown_category() {
        let repository = CategoryInMemoryRepository::new();
        let handler = SaveCategoryHandler::new(Arc::new(repository.clone()));
        let id = CategoryId::new();

        let result = handler
            .execute(SaveCategoryCommand::new(id.to_string(), "Movie", true).with_description("desc"))
            .await
            .unwrap();

        assert_eq!(result, SaveCategoryResult::new(id.to_string(), true));
        let stored = repository.items().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description(), Some("desc"));
    }

    #[tokio::test]
    async fn overwrites_existing_category() {
        let category = Category::create(CategoryProps::new("Movie"));
        let id = category.category_id().to_string();
        let repository = CategoryInMemoryRepository::with_items(vec![category]);
        let handler = SaveCategoryHandler::new(Arc::new(repository.clone()));

        let result = handler
            .execute(SaveCategoryCommand::new(id.clone(), "Films", false))
            .await
            .unwrap();

        assert!(!result.created);
        let stored = repository.items().await;
        assert_eq!(stored[0].name(), "Films");
        assert!(!stored[0].is_active());
    }

    #[tokio::test]
    async fn invalid_name_is_not_persisted() {
        let repository = CategoryInMemoryRepository::new();
        let handler = SaveCategoryHandler::new(Arc::new(repository.clone()));

        let error = handler
            .execute(SaveCategoryCommand::new(
                CategoryId::new().to_string(),
                "a".repeat(256),
                true,
            ))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AppError::EntityValidation(vec![ErrorEntry::field(
                "name",
                vec!["name must be shorter than or equal to 255 characters".to_string()]
            )])
        );
        assert!(repository.items().await.is_empty());
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let handler = SaveCategoryHandler::new(Arc::new(CategoryInMemoryRepository::new()));

        let error = handler
            .execute(SaveCategoryCommand::new("fake id", "Movie", true))
            .await
            .unwrap_err();

        assert_eq!(error, AppError::InvalidUuid("ID must be a valid UUID".to_string()));
    }

    #[tokio::test]
    async fn refuses_to_deactivate_the_only_active_category_of_a_genre() {
        let category_id = CategoryId::new();
        let category_hit = SearchHit::new(
            category_id.to_string(),
            json!({
                "category_name": "Movie",
                "category_description": null,
                "is_active": true,
                "created_at": "2024-05-01T10:00:00Z",
                "deleted_at": null,
                "type": "Category"
            }),
        );
        let genre_hit = SearchHit::new(
            "genre",
            json!({
                "genre_name": "Action",
                "categories": [{
                    "category_id": category_id.to_string(),
                    "category_name": "Movie",
                    "is_active": true,
                    "deleted_at": null,
                    "is_deleted": false
                }],
                "type": "Genre"
            }),
        );

        let mut store = MockDocumentStore::new();
        store
            .expect_search()
            .withf(|request| request.query.to_string().contains("\"ids\""))
            .returning(move |_| {
                Ok(SearchResponse {
                    total: 1,
                    hits: vec![category_hit.clone()],
                })
            });
        store
            .expect_search()
            .withf(|request| request.query.to_string().contains("\"nested\""))
            .returning(move |_| {
                Ok(SearchResponse {
                    total: 1,
                    hits: vec![genre_hit.clone()],
                })
            });
        let repository = CategoryElasticSearchRepository::new(Arc::new(store));
        let handler = SaveCategoryHandler::new(Arc::new(repository));

        let error = handler
            .execute(SaveCategoryCommand::new(category_id.to_string(), "Movie", false))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AppError::EntityValidation(vec![ErrorEntry::field(
                "is_active",
                vec![ONLY_ACTIVE_IN_RELATED.to_string()]
            )])
        );
    }
}
