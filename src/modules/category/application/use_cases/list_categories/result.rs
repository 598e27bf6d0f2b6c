use crate::modules::category::application::output::CategoryOutput;
use crate::shared::application::pagination::PaginationOutput;

pub type ListCategoriesResult = PaginationOutput<CategoryOutput>;
