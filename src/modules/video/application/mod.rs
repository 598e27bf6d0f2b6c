pub mod output;
pub mod use_cases;

pub use output::{VideoCastMemberOutput, VideoCategoryOutput, VideoGenreOutput, VideoOutput};
