use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveGenreCommand {
    pub genre_id: String,
    pub name: String,
    pub categories_id: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl SaveGenreCommand {
    pub fn new(
        genre_id: impl Into<String>,
        name: impl Into<String>,
        categories_id: Vec<String>,
        is_active: bool,
    ) -> Self {
        Self {
            genre_id: genre_id.into(),
            name: name.into(),
            categories_id,
            is_active,
            created_at: Utc::now(),
        }
    }
}
