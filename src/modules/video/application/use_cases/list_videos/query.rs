use serde::{Deserialize, Serialize};

use crate::shared::application::pagination::SearchInput;

/// Unvalidated video search filter, relation ids as raw strings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoSearchInput {
    pub title_or_description: Option<String>,
    #[serde(default)]
    pub categories_id: Vec<String>,
    #[serde(default)]
    pub genres_id: Vec<String>,
    #[serde(default)]
    pub cast_members_id: Vec<String>,
}

/// Search over published videos only
pub type ListVideosQuery = SearchInput<VideoSearchInput>;
