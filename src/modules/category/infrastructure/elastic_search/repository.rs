use async_trait::async_trait;
use std::sync::Arc;

use super::mapper::CategoryDocumentMapper;
use crate::modules::category::domain::{CategoryId, CategoryRepository};
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::elastic_search::{
    is_active_entry, is_not_deleted_entry, ElasticSearchRepository, NestedRelation,
};

pub type CategoryElasticSearchRepository = ElasticSearchRepository<CategoryDocumentMapper>;

#[async_trait]
impl CategoryRepository for ElasticSearchRepository<CategoryDocumentMapper> {
    fn ignore_soft_deleted(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn CategoryRepository> {
        Arc::new(self.without_scopes())
    }

    async fn has_only_one_activate_in_related(&self, category_id: &CategoryId) -> AppResult<bool> {
        self.has_only_one_in_related(
            NestedRelation::CATEGORIES,
            &category_id.to_string(),
            is_active_entry,
        )
        .await
    }

    async fn has_only_one_not_deleted_in_related(
        &self,
        category_id: &CategoryId,
    ) -> AppResult<bool> {
        self.has_only_one_in_related(
            NestedRelation::CATEGORIES,
            &category_id.to_string(),
            is_not_deleted_entry,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::{Category, CategoryProps, CategorySearchFilter};
    use crate::shared::domain::repository::{Repository, SearchParams, SearchableRepository};
    use crate::shared::errors::AppError;
    use crate::shared::infrastructure::elastic_search::query::{SearchHit, SearchResponse};
    use crate::shared::infrastructure::elastic_search::repository::MAX_RESULT_WINDOW;
    use crate::shared::infrastructure::elastic_search::store::MockDocumentStore;
    use serde_json::{json, Value};

    fn repository(store: MockDocumentStore) -> CategoryElasticSearchRepository {
        ElasticSearchRepository::new(Arc::new(store))
    }

    fn stored(category_id: &CategoryId, name: &str) -> SearchHit {
        SearchHit::new(
            category_id.to_string(),
            json!({
                "category_name": name,
                "category_description": null,
                "is_active": true,
                "created_at": "2024-05-01T10:00:00Z",
                "deleted_at": null,
                "type": "Category"
            }),
        )
    }

    fn nested_entry(category_id: &str, is_active: bool) -> Value {
        json!({
            "category_id": category_id,
            "category_name": "any",
            "is_active": is_active,
            "deleted_at": null,
            "is_deleted": false
        })
    }

    #[tokio::test]
    async fn insert_indexes_typed_document_under_entity_id() {
        let category = Category::create(CategoryProps::new("Movie"));
        let expected_id = category.category_id().to_string();

        let mut store = MockDocumentStore::new();
        store
            .expect_index_document()
            .withf(move |id, document| {
                id.to_string() == expected_id && document["type"] == "Category"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        repository(store).insert(&category).await.unwrap();
    }

    #[tokio::test]
    async fn update_of_missing_category_is_not_found() {
        let category = Category::create(CategoryProps::new("Movie"));

        let mut store = MockDocumentStore::new();
        store
            .expect_update_by_query()
            .times(1)
            .returning(|_, _| Ok(0));

        let error = repository(store).update(&category).await.unwrap_err();

        assert_eq!(
            error,
            AppError::NotFound(format!(
                "Category Not Found using ID {}",
                category.category_id()
            ))
        );
    }

    #[tokio::test]
    async fn update_rewrites_embedded_snapshots() {
        let mut category = Category::create(CategoryProps::new("Movie"));
        category.change_name("Films");

        let mut store = MockDocumentStore::new();
        store
            .expect_update_by_query()
            .withf(|query, script| {
                query.to_string().contains("\"ids\"")
                    && script.params["category_name"] == "Films"
            })
            .times(1)
            .returning(|_, _| Ok(1));
        store
            .expect_update_by_query()
            .withf(|query, script| {
                query.to_string().contains("\"nested\"")
                    && script.params["path"] == "categories"
                    && script.params["fields"]["category_name"] == "Films"
            })
            .times(1)
            .returning(|_, _| Ok(3));

        repository(store).update(&category).await.unwrap();
    }

    #[tokio::test]
    async fn soft_delete_scope_reaches_the_query() {
        let category_id = CategoryId::new();
        let hit = stored(&category_id, "Movie");

        let mut store = MockDocumentStore::new();
        store
            .expect_search()
            .withf(|request| {
                request.query["bool"]["must_not"][0] == json!({ "exists": { "field": "deleted_at" } })
                    && request.size == Some(1)
            })
            .times(1)
            .returning(move |_| {
                Ok(SearchResponse {
                    total: 1,
                    hits: vec![hit.clone()],
                })
            });

        let found = repository(store)
            .ignore_soft_deleted()
            .find_by_id(&category_id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.name(), "Movie");
    }

    #[tokio::test]
    async fn find_all_reads_up_to_the_result_window() {
        let hit = stored(&CategoryId::new(), "Movie");

        let mut store = MockDocumentStore::new();
        store
            .expect_search()
            .withf(|request| {
                request.size == Some(MAX_RESULT_WINDOW) && request.track_total_hits == Some(true)
            })
            .times(1)
            .returning(move |_| {
                Ok(SearchResponse {
                    total: MAX_RESULT_WINDOW + 5,
                    hits: vec![hit.clone()],
                })
            });

        let categories = repository(store).find_all().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name(), "Movie");
    }

    #[tokio::test]
    async fn search_pages_and_sorts_newest_first_by_default() {
        let hits = vec![stored(&CategoryId::new(), "Movie")];

        let mut store = MockDocumentStore::new();
        store
            .expect_search()
            .withf(|request| {
                request.from == Some(2)
                    && request.size == Some(2)
                    && request.sort == vec![json!({ "created_at": "desc" })]
                    && request.track_total_hits == Some(true)
            })
            .times(1)
            .returning(move |_| {
                Ok(SearchResponse {
                    total: 3,
                    hits: hits.clone(),
                })
            });
        let params = SearchParams::new(
            Some(2),
            Some(2),
            Some("description".to_string()),
            None,
            Some(CategorySearchFilter {
                name: Some("mov".to_string()),
                is_active: None,
            }),
        );

        let result = repository(store).search(&params).await.unwrap();

        assert_eq!(result.total, 3);
        assert_eq!(result.current_page, 2);
        assert_eq!(result.last_page, 2);
        assert_eq!(result.items.len(), 1);
    }

    #[tokio::test]
    async fn exists_by_id_splits_found_and_missing() {
        let present = CategoryId::new();
        let missing = CategoryId::new();
        let hit = SearchHit::new(present.to_string(), Value::Null);

        let mut store = MockDocumentStore::new();
        store
            .expect_search()
            .withf(|request| request.source == Some(false))
            .returning(move |_| {
                Ok(SearchResponse {
                    total: 1,
                    hits: vec![hit.clone()],
                })
            });

        let result = repository(store)
            .exists_by_id(&[present, missing])
            .await
            .unwrap();

        assert_eq!(result.exists, vec![present]);
        assert_eq!(result.not_exists, vec![missing]);
    }

    #[tokio::test]
    async fn only_active_category_of_a_genre_is_detected() {
        let category_id = CategoryId::new();
        let genre = SearchHit::new(
            "genre-1",
            json!({
                "genre_name": "Action",
                "categories": [
                    nested_entry(&category_id.to_string(), true),
                    nested_entry(&CategoryId::new().to_string(), false)
                ],
                "type": "Genre"
            }),
        );

        let mut store = MockDocumentStore::new();
        store.expect_search().returning(move |_| {
            Ok(SearchResponse {
                total: 1,
                hits: vec![genre.clone()],
            })
        });

        let repository = repository(store);

        assert!(repository
            .has_only_one_activate_in_related(&category_id)
            .await
            .unwrap());
        assert!(!repository
            .has_only_one_not_deleted_in_related(&category_id)
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn delete_of_missing_category_is_not_found() {
        let mut store = MockDocumentStore::new();
        store.expect_delete_by_query().returning(|_| Ok(0));

        let result = repository(store).delete(&CategoryId::new()).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
