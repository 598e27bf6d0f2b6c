use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveGenreResult {
    pub id: String,
    pub created: bool,
}

impl SaveGenreResult {
    pub fn new(id: String, created: bool) -> Self {
        Self { id, created }
    }
}
