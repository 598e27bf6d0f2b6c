use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveCastMemberResult {
    pub id: String,
    pub created: bool,
}

impl SaveCastMemberResult {
    pub fn new(id: String, created: bool) -> Self {
        Self { id, created }
    }
}
