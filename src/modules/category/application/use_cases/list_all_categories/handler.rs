use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::output::CategoryOutput;
use crate::modules::category::domain::{CategoryFilter, CategoryRepository};
use crate::shared::application::use_case::Query;
use crate::shared::domain::repository::{Repository, SortOrder};
use crate::shared::errors::AppResult;

use super::query::ListAllCategoriesQuery;

pub struct ListAllCategoriesHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl ListAllCategoriesHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl Query<ListAllCategoriesQuery, Vec<CategoryOutput>> for ListAllCategoriesHandler {
    async fn execute(&self, _query: ListAllCategoriesQuery) -> AppResult<Vec<CategoryOutput>> {
        let categories = self
            .category_repository
            .ignore_soft_deleted()
            .find_by(&CategoryFilter::active(), Some(SortOrder::asc("name")))
            .await?;

        Ok(categories.iter().map(CategoryOutput::from).collect())
    }
}
