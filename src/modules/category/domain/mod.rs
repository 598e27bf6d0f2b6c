pub mod category;
pub mod nested_category;
pub mod repository;

pub use category::{Category, CategoryFilter, CategoryId, CategoryProps, CategorySearchFilter};
pub use nested_category::NestedCategory;
pub use repository::CategoryRepository;
