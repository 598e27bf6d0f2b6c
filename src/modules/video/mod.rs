pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::VideoOutput;
pub use domain::{Rating, Video, VideoId, VideoRepository};
pub use infrastructure::{VideoElasticSearchRepository, VideoInMemoryRepository};
