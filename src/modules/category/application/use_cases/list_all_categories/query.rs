/// Every active, non-deleted category, ordered by name
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAllCategoriesQuery;
