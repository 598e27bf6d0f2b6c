mod handler;
mod query;

pub use handler::GetCategoryHandler;
pub use query::GetCategoryQuery;
