pub mod delete_category;
pub mod get_category;
pub mod list_all_categories;
pub mod list_categories;
pub mod save_category;

pub use delete_category::{DeleteCategoryCommand, DeleteCategoryHandler};
pub use get_category::{GetCategoryHandler, GetCategoryQuery};
pub use list_all_categories::{ListAllCategoriesHandler, ListAllCategoriesQuery};
pub use list_categories::{ListCategoriesHandler, ListCategoriesQuery, ListCategoriesResult};
pub use save_category::{SaveCategoryCommand, SaveCategoryHandler, SaveCategoryResult};
