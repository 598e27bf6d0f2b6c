use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::category::domain::{CategoryId, NestedCategory};
use crate::modules::genre::domain::{Genre, GenreId};
use crate::shared::domain::aggregate::AggregateRoot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreCategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub is_active: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<&NestedCategory> for GenreCategoryOutput {
    fn from(category: &NestedCategory) -> Self {
        Self {
            id: *category.category_id(),
            name: category.name().to_string(),
            is_active: category.is_active(),
            deleted_at: category.deleted_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: String,
    pub categories: Vec<GenreCategoryOutput>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Genre> for GenreOutput {
    fn from(genre: &Genre) -> Self {
        Self {
            id: *genre.genre_id(),
            name: genre.name().to_string(),
            categories: genre.categories().map(GenreCategoryOutput::from).collect(),
            is_active: genre.is_active(),
            created_at: genre.created_at(),
        }
    }
}
