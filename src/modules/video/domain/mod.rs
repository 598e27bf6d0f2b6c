pub mod rating;
pub mod repository;
pub mod video;

pub use rating::Rating;
pub use repository::VideoRepository;
pub use video::{Video, VideoFilter, VideoId, VideoProps, VideoSearchFilter};
