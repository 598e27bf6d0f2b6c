use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Full state of a video to create or overwrite; relations are given by id
#[derive(Debug, Clone, Deserialize)]
pub struct SaveVideoCommand {
    pub video_id: String,
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
    pub categories_id: Vec<String>,
    pub genres_id: Vec<String>,
    pub cast_members_id: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl SaveVideoCommand {
    pub fn new(
        video_id: impl Into<String>,
        title: impl Into<String>,
        categories_id: Vec<String>,
        genres_id: Vec<String>,
        cast_members_id: Vec<String>,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            title: title.into(),
            description: String::new(),
            year_launched: 2000,
            duration: 90,
            rating: "L".to_string(),
            is_opened: false,
            is_published: false,
            banner_url: None,
            thumbnail_url: None,
            thumbnail_half_url: None,
            trailer_url: String::new(),
            video_url: String::new(),
            categories_id,
            genres_id,
            cast_members_id,
            created_at: Utc::now(),
        }
    }
}
