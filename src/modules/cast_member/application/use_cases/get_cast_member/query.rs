#[derive(Debug, Clone)]
pub struct GetCastMemberQuery {
    pub id: String,
}

impl GetCastMemberQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
