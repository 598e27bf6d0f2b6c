pub mod delete_video;
pub mod get_video;
pub mod list_videos;
pub mod save_video;

pub use delete_video::{DeleteVideoCommand, DeleteVideoHandler};
pub use get_video::{GetVideoHandler, GetVideoQuery};
pub use list_videos::{ListVideosHandler, ListVideosQuery, ListVideosResult, VideoSearchInput};
pub use save_video::{SaveVideoCommand, SaveVideoHandler, SaveVideoResult};
