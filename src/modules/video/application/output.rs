use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::cast_member::domain::{CastMemberId, NestedCastMember};
use crate::modules::category::domain::{CategoryId, NestedCategory};
use crate::modules::genre::domain::{GenreId, NestedGenre};
use crate::modules::video::domain::{Video, VideoId};
use crate::shared::domain::aggregate::AggregateRoot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoCategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub is_active: bool,
}

impl From<&NestedCategory> for VideoCategoryOutput {
    fn from(category: &NestedCategory) -> Self {
        Self {
            id: *category.category_id(),
            name: category.name().to_string(),
            is_active: category.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoGenreOutput {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
}

impl From<&NestedGenre> for VideoGenreOutput {
    fn from(genre: &NestedGenre) -> Self {
        Self {
            id: *genre.genre_id(),
            name: genre.name().to_string(),
            is_active: genre.is_active(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoCastMemberOutput {
    pub id: CastMemberId,
    pub name: String,
    #[serde(rename = "type")]
    pub cast_member_type: i32,
}

impl From<&NestedCastMember> for VideoCastMemberOutput {
    fn from(cast_member: &NestedCastMember) -> Self {
        Self {
            id: *cast_member.cast_member_id(),
            name: cast_member.name().to_string(),
            cast_member_type: cast_member.cast_member_type().as_i32(),
        }
    }
}

/// Video as returned by the use cases, relations included
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoOutput {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: String,
    pub is_opened: bool,
    pub is_published: bool,
    pub banner_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_half_url: Option<String>,
    pub trailer_url: String,
    pub video_url: String,
    pub categories: Vec<VideoCategoryOutput>,
    pub genres: Vec<VideoGenreOutput>,
    pub cast_members: Vec<VideoCastMemberOutput>,
    pub created_at: DateTime<Utc>,
}

impl From<&Video> for VideoOutput {
    fn from(video: &Video) -> Self {
        Self {
            id: *video.video_id(),
            title: video.title().to_string(),
            description: video.description().to_string(),
            year_launched: video.year_launched(),
            duration: video.duration(),
            rating: video.rating().to_string(),
            is_opened: video.is_opened(),
            is_published: video.is_published(),
            banner_url: video.banner_url().map(str::to_string),
            thumbnail_url: video.thumbnail_url().map(str::to_string),
            thumbnail_half_url: video.thumbnail_half_url().map(str::to_string),
            trailer_url: video.trailer_url().to_string(),
            video_url: video.video_url().to_string(),
            categories: video.categories().map(VideoCategoryOutput::from).collect(),
            genres: video.genres().map(VideoGenreOutput::from).collect(),
            cast_members: video
                .cast_members()
                .map(VideoCastMemberOutput::from)
                .collect(),
            created_at: video.created_at(),
        }
    }
}

impl From<Video> for VideoOutput {
    fn from(video: Video) -> Self {
        Self::from(&video)
    }
}
