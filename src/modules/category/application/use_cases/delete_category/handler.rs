use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryId, CategoryRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::command::DeleteCategoryCommand;

const ONLY_NOT_DELETED_IN_RELATED: &str =
    "category is the only category of a related genre or video";

pub struct DeleteCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl DeleteCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCategoryCommand, ()> for DeleteCategoryHandler {
    async fn execute(&self, command: DeleteCategoryCommand) -> AppResult<()> {
        LogContext::use_case("DeleteCategory", &command.id);
        let category_id: CategoryId = command.id.parse()?;

        let mut category = self
            .category_repository
            .find_by_id(&category_id)
            .await?
            .ok_or_else(|| AppError::not_found(Category::ENTITY_NAME, &[category_id]))?;

        if !category.is_deleted()
            && self
                .category_repository
                .has_only_one_not_deleted_in_related(&category_id)
                .await?
        {
            category
                .notification_mut()
                .add_error("id", ONLY_NOT_DELETED_IN_RELATED);
            return Err(AppError::entity_validation(category.notification()));
        }

        category.mark_as_deleted();
        self.category_repository.update(&category).await?;
        info!("Category {} soft deleted", category_id);
        Ok(())
    }
}
