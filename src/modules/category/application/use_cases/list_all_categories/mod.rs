mod handler;
mod query;

pub use handler::ListAllCategoriesHandler;
pub use query::ListAllCategoriesQuery;
