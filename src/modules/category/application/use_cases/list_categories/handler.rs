use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::application::output::CategoryOutput;
use crate::modules::category::domain::{CategoryRepository, CategorySearchFilter};
use crate::shared::application::pagination::PaginationOutput;
use crate::shared::application::use_case::Query;
use crate::shared::domain::repository::SearchableRepository;
use crate::shared::errors::AppResult;

use super::{query::ListCategoriesQuery, result::ListCategoriesResult};

pub struct ListCategoriesHandler {
    category_repository: Arc<dyn CategoryRepository>,
}

impl ListCategoriesHandler {
    pub fn new(category_repository: Arc<dyn CategoryRepository>) -> Self {
        Self {
            category_repository,
        }
    }
}

#[async_trait]
impl Query<ListCategoriesQuery, ListCategoriesResult> for ListCategoriesHandler {
    async fn execute(&self, query: ListCategoriesQuery) -> AppResult<ListCategoriesResult> {
        let filter = CategorySearchFilter {
            is_active: Some(true),
            ..query.filter.clone().unwrap_or_default()
        };
        let params = query.into_params(Some(filter));

        let result = self
            .category_repository
            .ignore_soft_deleted()
            .search(&params)
            .await?;

        Ok(PaginationOutput::from_search_result(result, |category| {
            CategoryOutput::from(&category)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::{Category, CategoryProps};
    use crate::modules::category::infrastructure::CategoryInMemoryRepository;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn pages_through_active_categories_newest_first() {
        let now = Utc::now();
        let categories: Vec<Category> = (0..4)
            .map(|n| {
                Category::create(CategoryProps {
                    created_at: now + Duration::seconds(n),
                    is_active: n != 3,
                    ..CategoryProps::new(format!("Category {}", n))
                })
            })
            .collect();
        let repository = CategoryInMemoryRepository::with_items(categories);
        let handler = ListCategoriesHandler::new(Arc::new(repository));

        let output = handler
            .execute(ListCategoriesQuery {
                page: Some(1),
                per_page: Some(2),
                ..ListCategoriesQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(output.total, 3);
        assert_eq!(output.last_page, 2);
        let names: Vec<&str> = output.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Category 2", "Category 1"]);
    }

    #[tokio::test]
    async fn filters_by_name_and_sorts_on_request() {
        let repository = CategoryInMemoryRepository::with_items(vec![
            Category::create(CategoryProps::new("Drama")),
            Category::create(CategoryProps::new("Docudrama")),
            Category::create(CategoryProps::new("Comedy")),
        ]);
        let handler = ListCategoriesHandler::new(Arc::new(repository));

        let output = handler
            .execute(ListCategoriesQuery {
                sort: Some("name".to_string()),
                sort_dir: Some("desc".to_string()),
                filter: Some(CategorySearchFilter {
                    name: Some("DRAMA".to_string()),
                    is_active: None,
                }),
                ..ListCategoriesQuery::default()
            })
            .await
            .unwrap();

        let names: Vec<&str> = output.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Drama", "Docudrama"]);
    }
}
