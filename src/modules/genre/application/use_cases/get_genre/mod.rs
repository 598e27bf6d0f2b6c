mod handler;
mod query;

pub use handler::GetGenreHandler;
pub use query::GetGenreQuery;
