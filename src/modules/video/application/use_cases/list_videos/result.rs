use crate::modules::video::application::output::VideoOutput;
use crate::shared::application::pagination::PaginationOutput;

pub type ListVideosResult = PaginationOutput<VideoOutput>;
