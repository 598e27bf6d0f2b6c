mod handler;
mod query;

pub use handler::GetVideoHandler;
pub use query::GetVideoQuery;
