mod handler;
mod query;
mod result;

pub use handler::ListVideosHandler;
pub use query::{ListVideosQuery, VideoSearchInput};
pub use result::ListVideosResult;
