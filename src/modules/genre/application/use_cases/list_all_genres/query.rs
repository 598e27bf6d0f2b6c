/// Every active, non-deleted genre, ordered by name
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAllGenresQuery;
