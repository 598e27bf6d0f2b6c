use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Full state of a category to create or overwrite
#[derive(Debug, Clone, Deserialize)]
pub struct SaveCategoryCommand {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl SaveCategoryCommand {
    pub fn new(id: impl Into<String>, name: impl Into<String>, is_active: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            is_active,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
