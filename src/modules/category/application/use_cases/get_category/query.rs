#[derive(Debug, Clone)]
pub struct GetCategoryQuery {
    pub id: String,
}

impl GetCategoryQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
