use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::modules::category::domain::{
    Category, CategoryFilter, CategoryId, CategoryProps, CategorySearchFilter, NestedCategory,
};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::elastic_search::mapper::{
    ensure_loadable, parse_document_id, DocumentMapper, NestedRelation, NestedSnapshot,
    SearchableDocumentMapper,
};
use crate::shared::infrastructure::elastic_search::query::{contains, ids, term, BoolQuery};

pub const CATEGORY_DOCUMENT_TYPE: &str = "Category";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDocument {
    pub category_name: String,
    pub category_description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub document_type: String,
}

/// Entry of the `categories` array in genre and video documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedCategoryDocument {
    pub category_id: String,
    pub category_name: String,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl From<&NestedCategory> for NestedCategoryDocument {
    fn from(nested: &NestedCategory) -> Self {
        Self {
            category_id: nested.category_id().to_string(),
            category_name: nested.name().to_string(),
            is_active: nested.is_active(),
            deleted_at: nested.deleted_at(),
            is_deleted: nested.is_deleted(),
        }
    }
}

impl NestedCategoryDocument {
    pub fn into_nested(self, errors: &mut Notification) -> NestedCategory {
        let category_id: CategoryId = parse_document_id("categories", &self.category_id, errors);
        NestedCategory::create(category_id, self.category_name, self.is_active, self.deleted_at)
    }
}

pub struct CategoryDocumentMapper;

impl DocumentMapper for CategoryDocumentMapper {
    type Entity = Category;
    type Document = CategoryDocument;

    const DOCUMENT_TYPE: &'static str = CATEGORY_DOCUMENT_TYPE;

    fn to_document(category: &Category) -> CategoryDocument {
        CategoryDocument {
            category_name: category.name().to_string(),
            category_description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
            deleted_at: category.deleted_at(),
            document_type: CATEGORY_DOCUMENT_TYPE.to_string(),
        }
    }

    fn to_entity(id: &str, document: CategoryDocument) -> AppResult<Category> {
        let mut errors = Notification::new();
        let mut category = Category::new(CategoryProps {
            category_id: parse_document_id("category_id", id, &mut errors),
            name: document.category_name,
            description: document.category_description,
            is_active: document.is_active,
            created_at: document.created_at,
            deleted_at: document.deleted_at,
        });
        category.validate(&[]);
        ensure_loadable(category, errors)
    }

    fn filter_clauses(filter: &CategoryFilter) -> Vec<Value> {
        let mut clauses = Vec::new();
        if let Some(category_id) = &filter.category_id {
            clauses.push(ids(&[category_id.to_string()]));
        }
        if let Some(name) = &filter.name {
            clauses.push(term("category_name", name.as_str()));
        }
        if let Some(is_active) = filter.is_active {
            clauses.push(term("is_active", is_active));
        }
        clauses
    }

    fn sort_field(field: &str) -> Option<&'static str> {
        match field {
            "name" => Some("category_name"),
            "created_at" => Some("created_at"),
            _ => None,
        }
    }

    fn nested_snapshot(category: &Category) -> Option<NestedSnapshot> {
        let mut fields = Map::new();
        fields.insert("category_name".to_string(), json!(category.name()));
        fields.insert("is_active".to_string(), json!(category.is_active()));
        fields.insert("deleted_at".to_string(), json!(category.deleted_at()));
        fields.insert("is_deleted".to_string(), json!(category.is_deleted()));

        Some(NestedSnapshot {
            relation: NestedRelation::CATEGORIES,
            id: category.category_id().to_string(),
            fields,
        })
    }
}

impl SearchableDocumentMapper for CategoryDocumentMapper {
    fn search_query(filter: &CategorySearchFilter, mut query: BoolQuery) -> BoolQuery {
        if let Some(name) = &filter.name {
            query = query.must(contains("category_name", name));
        }
        if let Some(is_active) = filter.is_active {
            query = query.must(term("is_active", is_active));
        }
        query
    }
}
