use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::category::domain::{Category, CategoryId, CategoryRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::in_memory::InMemoryRepository;

pub type CategoryInMemoryRepository = InMemoryRepository<Category>;

// Relations live in other aggregates' stores, never tracked in memory.
#[async_trait]
impl CategoryRepository for InMemoryRepository<Category> {
    fn ignore_soft_deleted(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(self.without_scopes())
    }

    async fn has_only_one_activate_in_related(&self, _category_id: &CategoryId) -> AppResult<bool> {
        Ok(false)
    }

    async fn has_only_one_not_deleted_in_related(
        &self,
        _category_id: &CategoryId,
    ) -> AppResult<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::{CategoryFilter, CategoryProps, CategorySearchFilter};
    use crate::shared::domain::repository::{
        Repository, SearchParams, SearchableRepository, SortOrder,
    };

    fn category(name: &str, is_active: bool) -> Category {
        Category::create(CategoryProps {
            is_active,
            ..CategoryProps::new(name)
        })
    }

    #[tokio::test]
    async fn scoped_view_hides_deleted_categories() {
        let mut deleted = category("Deleted", true);
        deleted.mark_as_deleted();
        let repository = CategoryInMemoryRepository::with_items(vec![
            category("Movie", true),
            deleted,
        ]);

        let visible = repository.ignore_soft_deleted().find_all().await.unwrap();
        let everything = repository.clear_scopes().find_all().await.unwrap();

        assert_eq!(visible.len(), 1);
        assert_eq!(everything.len(), 2);
        assert!(repository.active_scopes().is_empty());
    }

    #[tokio::test]
    async fn find_by_sorts_active_categories_by_name() {
        let repository = CategoryInMemoryRepository::with_items(vec![
            category("Series", true),
            category("Anime", true),
            category("Inactive", false),
        ]);

        let found = repository
            .find_by(&CategoryFilter::active(), Some(SortOrder::asc("name")))
            .await
            .unwrap();

        let names: Vec<&str> = found.iter().map(Category::name).collect();
        assert_eq!(names, vec!["Anime", "Series"]);
    }

    #[tokio::test]
    async fn search_filters_by_name_fragment() {
        let repository = CategoryInMemoryRepository::with_items(vec![
            category("Science Fiction", true),
            category("Fiction", true),
            category("Drama", true),
        ]);
        let params = SearchParams::new(
            Some(1),
            Some(1),
            Some("name".to_string()),
            None,
            Some(CategorySearchFilter {
                name: Some("fiction".to_string()),
                is_active: None,
            }),
        );

        let result = repository.search(&params).await.unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.last_page, 2);
        assert_eq!(result.items[0].name(), "Fiction");
    }

    #[tokio::test]
    async fn relation_checks_report_false() {
        let repository = CategoryInMemoryRepository::new();
        let id = CategoryId::new();

        assert!(!repository.has_only_one_activate_in_related(&id).await.unwrap());
        assert!(!repository.has_only_one_not_deleted_in_related(&id).await.unwrap());
    }
}
