use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::modules::category::infrastructure::elastic_search::NestedCategoryDocument;
use crate::modules::genre::domain::{Genre, GenreFilter, GenreId, GenreProps, NestedGenre};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::errors::AppResult;
use crate::shared::infrastructure::elastic_search::mapper::{
    ensure_loadable, parse_document_id, DocumentMapper, NestedRelation, NestedSnapshot,
};
use crate::shared::infrastructure::elastic_search::query::{ids, term};

pub const GENRE_DOCUMENT_TYPE: &str = "Genre";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreDocument {
    pub genre_name: String,
    pub categories: Vec<NestedCategoryDocument>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub document_type: String,
}

/// Entry of the `genres` array in video documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedGenreDocument {
    pub genre_id: String,
    pub genre_name: String,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

impl From<&NestedGenre> for NestedGenreDocument {
    fn from(nested: &NestedGenre) -> Self {
        Self {
            genre_id: nested.genre_id().to_string(),
            genre_name: nested.name().to_string(),
            is_active: nested.is_active(),
            deleted_at: nested.deleted_at(),
            is_deleted: nested.is_deleted(),
        }
    }
}

impl NestedGenreDocument {
    pub fn into_nested(self, errors: &mut Notification) -> NestedGenre {
        let genre_id: GenreId = parse_document_id("genres", &self.genre_id, errors);
        NestedGenre::create(genre_id, self.genre_name, self.is_active, self.deleted_at)
    }
}

pub struct GenreDocumentMapper;

impl DocumentMapper for GenreDocumentMapper {
    type Entity = Genre;
    type Document = GenreDocument;

    const DOCUMENT_TYPE: &'static str = GENRE_DOCUMENT_TYPE;

    fn to_document(genre: &Genre) -> GenreDocument {
        GenreDocument {
            genre_name: genre.name().to_string(),
            categories: genre.categories().map(NestedCategoryDocument::from).collect(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
            deleted_at: genre.deleted_at(),
            document_type: GENRE_DOCUMENT_TYPE.to_string(),
        }
    }

    fn to_entity(id: &str, document: GenreDocument) -> AppResult<Genre> {
        let mut errors = Notification::new();
        let categories = document
            .categories
            .into_iter()
            .map(|category| category.into_nested(&mut errors))
            .collect();

        let mut genre = Genre::new(GenreProps {
            genre_id: parse_document_id("genre_id", id, &mut errors),
            name: document.genre_name,
            categories,
            is_active: document.is_active,
            created_at: document.created_at,
            deleted_at: document.deleted_at,
        });
        genre.validate(&[]);
        ensure_loadable(genre, errors)
    }

    fn filter_clauses(filter: &GenreFilter) -> Vec<Value> {
        let mut clauses = Vec::new();
        if let Some(genre_id) = &filter.genre_id {
            clauses.push(ids(&[genre_id.to_string()]));
        }
        if let Some(is_active) = filter.is_active {
            clauses.push(term("is_active", is_active));
        }
        clauses
    }

    fn sort_field(field: &str) -> Option<&'static str> {
        match field {
            "name" => Some("genre_name"),
            "created_at" => Some("created_at"),
            _ => None,
        }
    }

    fn nested_snapshot(genre: &Genre) -> Option<NestedSnapshot> {
        let mut fields = Map::new();
        fields.insert("genre_name".to_string(), json!(genre.name()));
        fields.insert("is_active".to_string(), json!(genre.is_active()));
        fields.insert("deleted_at".to_string(), json!(genre.deleted_at()));
        fields.insert("is_deleted".to_string(), json!(genre.is_deleted()));

        Some(NestedSnapshot {
            relation: NestedRelation::GENRES,
            id: genre.genre_id().to_string(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::category::domain::{CategoryId, NestedCategory};
    use crate::shared::errors::AppError;
    use crate::shared::infrastructure::elastic_search::mapper::{decode, encode};

    const ID: &str = "0f9d4c6e-0a4e-4a57-9f7c-3d1f3a9e2b11";

    #[test]
    fn embeds_category_snapshots() {
        let category = NestedCategory::create(CategoryId::new(), "Movie", true, None);
        let genre = Genre::create(GenreProps::new("Action", vec![category.clone()]));

        let document = encode::<GenreDocumentMapper>(&genre).unwrap();

        assert_eq!(document["type"], "Genre");
        assert_eq!(
            document["categories"],
            json!([{
                "category_id": category.category_id().to_string(),
                "category_name": "Movie",
                "is_active": true,
                "deleted_at": null,
                "is_deleted": false
            }])
        );
    }

    #[test]
    fn loading_genre_without_categories_fails() {
        let source = json!({
            "genre_name": "Action",
            "categories": [],
            "is_active": true,
            "created_at": "2024-05-01T10:00:00Z",
            "deleted_at": null,
            "type": "Genre"
        });

        let error = decode::<GenreDocumentMapper>(ID, source).unwrap_err();

        assert_eq!(
            error.error_entries().map(<[_]>::len),
            Some(1)
        );
        assert!(matches!(error, AppError::LoadEntity(_)));
    }

    #[test]
    fn nested_entry_with_bad_id_fails_to_load() {
        let source = json!({
            "genre_name": "Action",
            "categories": [{
                "category_id": "not-a-uuid",
                "category_name": "Movie",
                "is_active": true,
                "deleted_at": null,
                "is_deleted": false
            }],
            "is_active": true,
            "created_at": "2024-05-01T10:00:00Z",
            "deleted_at": null,
            "type": "Genre"
        });

        assert!(matches!(
            decode::<GenreDocumentMapper>(ID, source),
            Err(AppError::LoadEntity(_))
        ));
    }
}
