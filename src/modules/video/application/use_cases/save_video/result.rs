use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveVideoResult {
    pub id: String,
    pub created: bool,
}

impl SaveVideoResult {
    pub fn new(id: String, created: bool) -> Self {
        Self { id, created }
    }
}
