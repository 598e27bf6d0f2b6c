#[derive(Debug, Clone)]
pub struct GetGenreQuery {
    pub id: String,
}

impl GetGenreQuery {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
