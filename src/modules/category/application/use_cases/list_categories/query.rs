use crate::modules::category::domain::CategorySearchFilter;
use crate::shared::application::pagination::SearchInput;

/// Paginated category listing; only active categories are ever returned
pub type ListCategoriesQuery = SearchInput<CategorySearchFilter>;
