use serde::Serialize;

/// Outcome of a save: the id and whether a new category was created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveCategoryResult {
    pub id: String,
    pub created: bool,
}

impl SaveCategoryResult {
    pub fn new(id: String, created: bool) -> Self {
        Self { id, created }
    }
}
