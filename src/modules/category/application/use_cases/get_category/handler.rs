use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::output::CategoryOutput;
use crate::modules::category::domain::{Category, CategoryFilter, CategoryId, CategoryRepository};
use crate::shared::application::use_case::Query;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};

use super::query::GetCategoryQuery;

/// Fetches a category that is active and not soft deleted
pub struct GetCategoryHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl GetCategoryHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl Query<GetCategoryQuery, CategoryOutput> for GetCategoryHandler {
    async fn execute(&self, query: GetCategoryQuery) -> AppResult<CategoryOutput> {
        let category_id: CategoryId = query.id.parse()?;

        self.category_repository
            .ignore_soft_deleted()
            .find_one_by(&CategoryFilter::active_by_id(category_id))
            .await?
            .map(CategoryOutput::from)
            .ok_or_else(|| AppError::not_found(Category::ENTITY_NAME, &[category_id]))
    }
}
