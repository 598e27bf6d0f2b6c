use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::modules::cast_member::infrastructure::elastic_search::NestedCastMemberDocument;
use crate::modules::category::infrastructure::elastic_search::NestedCategoryDocument;
use crate::modules::genre::infrastructure::elastic_search::NestedGenreDocument;
use crate::modules::video::domain::{Rating, Video, VideoFilter, VideoProps, VideoSearchFilter};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::elastic_search::mapper::{
    ensure_loadable, parse_document_id, DocumentMapper, NestedRelation, SearchableDocumentMapper,
};
use crate::shared::infrastructure::elastic_search::query::{ids, term, BoolQuery};

pub const VIDEO_DOCUMENT_TYPE: &str = "Video";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDocument {
    pub video_title: String,
    /// Untokenized copy of the title used for sorting
    pub video_title_keyword: String,
    pub video_description: String,
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
    pub categories: Vec<NestedCategoryDocument>,
    pub genres: Vec<NestedGenreDocument>,
    pub cast_members: Vec<NestedCastMemberDocument>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    pub document_type: String,
}

pub struct VideoDocumentMapper;

impl VideoDocumentMapper {
    fn id_values<I: ToString>(ids: &[I]) -> Vec<Value> {
        ids.iter().map(|id| json!(id.to_string())).collect()
    }
}

impl DocumentMapper for VideoDocumentMapper {
    type Entity = Video;
    type Document = VideoDocument;

    const DOCUMENT_TYPE: &'static str = VIDEO_DOCUMENT_TYPE;

    fn to_document(video: &Video) -> VideoDocument {
        VideoDocument {
            video_title: video.title().to_string(),
            video_title_keyword: video.title().to_string(),
            video_description: video.description().to_string(),
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
            categories: video.categories().map(NestedCategoryDocument::from).collect(),
            genres: video.genres().map(NestedGenreDocument::from).collect(),
            cast_members: video
                .cast_members()
                .map(NestedCastMemberDocument::from)
                .collect(),
            created_at: video.created_at(),
            deleted_at: video.deleted_at(),
            document_type: VIDEO_DOCUMENT_TYPE.to_string(),
        }
    }

    fn to_entity(id: &str, document: VideoDocument) -> AppResult<Video> {
        let mut errors = Notification::new();
        let rating = document.rating.parse().unwrap_or_else(|error: AppError| {
            errors.add_error("rating", error.to_string());
            Rating::RL
        });
        let categories = document
            .categories
            .into_iter()
            .map(|category| category.into_nested(&mut errors))
            .collect();
        let genres = document
            .genres
            .into_iter()
            .map(|genre| genre.into_nested(&mut errors))
            .collect();
        let cast_members = document
            .cast_members
            .into_iter()
            .map(|cast_member| cast_member.into_nested(&mut errors))
            .collect();

        let mut video = Video::new(VideoProps {
            video_id: parse_document_id("video_id", id, &mut errors),
            title: document.video_title,
            description: document.video_description,
            year_launched: document.year_launched,
            duration: document.duration,
            rating,
            is_opened: document.is_opened,
            is_published: document.is_published,
            banner_url: document.banner_url,
            thumbnail_url: document.thumbnail_url,
            thumbnail_half_url: document.thumbnail_half_url,
            trailer_url: document.trailer_url,
            video_url: document.video_url,
            categories,
            genres,
            cast_members,
            created_at: document.created_at,
            deleted_at: document.deleted_at,
        });
        video.validate(&[]);
        ensure_loadable(video, errors)
    }

    fn filter_clauses(filter: &VideoFilter) -> Vec<Value> {
        let mut clauses = Vec::new();
        if let Some(video_id) = &filter.video_id {
            clauses.push(ids(&[video_id.to_string()]));
        }
        if let Some(is_published) = filter.is_published {
            clauses.push(term("is_published", is_published));
        }
        clauses
    }

    fn sort_field(field: &str) -> Option<&'static str> {
        match field {
            "title" => Some("video_title_keyword"),
            "created_at" => Some("created_at"),
            _ => None,
        }
    }
}

impl SearchableDocumentMapper for VideoDocumentMapper {
    fn search_query(filter: &VideoSearchFilter, mut query: BoolQuery) -> BoolQuery {
        if let Some(text) = &filter.title_or_description {
            query = query.must(json!({
                "multi_match": {
                    "query": text,
                    "type": "most_fields",
                    "fields": ["video_title", "video_description"],
                    "fuzziness": "AUTO"
                }
            }));
        }
        if !filter.categories_id.is_empty() {
            query = query.must(
                NestedRelation::CATEGORIES.contains_any(Self::id_values(&filter.categories_id)),
            );
        }
        if !filter.genres_id.is_empty() {
            query = query
                .must(NestedRelation::GENRES.contains_any(Self::id_values(&filter.genres_id)));
        }
        if !filter.cast_members_id.is_empty() {
            query = query.must(
                NestedRelation::CAST_MEMBERS
                    .contains_any(Self::id_values(&filter.cast_members_id)),
            );
        }
        if let Some(is_published) = filter.is_published {
            query = query.must(term("is_published", is_published));
        }
        query
    }
}
