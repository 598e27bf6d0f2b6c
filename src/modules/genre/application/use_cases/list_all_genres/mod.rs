mod handler;
mod query;

pub use handler::ListAllGenresHandler;
pub use query::ListAllGenresQuery;
