use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::rating::Rating;
use crate::modules::cast_member::domain::{CastMemberId, NestedCastMember};
use crate::modules::category::domain::{CategoryId, NestedCategory};
use crate::modules::genre::domain::{GenreId, NestedGenre};
use crate::shared::domain::aggregate::{contains_ignore_case, AggregateRoot, Searchable};
use crate::shared::domain::notification::Notification;
use crate::shared::validation::{MaxLength, NotEmpty, ValidationChain};

crate::entity_id!(
    /// Identity of a [`Video`]
    VideoId
);

#[derive(Debug, Clone)]
pub struct VideoProps {
    pub video_id: VideoId,
    pub title: String,
    pub description: String,
    pub year_launched: i32,
    pub duration: i32,
    pub rating: Rating,
    pub is_opened: bool,
    pub is_published: bool,
    pub banner_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub thumbnail_half_url: Option<String>,
    pub trailer_url: String,
    pub video_url: String,
    pub categories: Vec<NestedCategory>,
    pub genres: Vec<NestedGenre>,
    pub cast_members: Vec<NestedCastMember>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VideoProps {
    /// Unpublished, closed video without media, created now
    pub fn new(
        title: impl Into<String>,
        categories: Vec<NestedCategory>,
        genres: Vec<NestedGenre>,
        cast_members: Vec<NestedCastMember>,
    ) -> Self {
        Self {
            video_id: VideoId::new(),
            title: title.into(),
            description: String::new(),
            year_launched: 2000,
            duration: 90,
            rating: Rating::RL,
            is_opened: false,
            is_published: false,
            banner_url: None,
            thumbnail_url: None,
            thumbnail_half_url: None,
            trailer_url: String::new(),
            video_url: String::new(),
            categories,
            genres,
            cast_members,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }
}

/// A video with its media locations and the snapshots of the categories,
/// genres and cast members it is classified under.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    video_id: VideoId,
    title: String,
    description: String,
    year_launched: i32,
    duration: i32,
    rating: Rating,
    is_opened: bool,
    is_published: bool,
    banner_url: Option<String>,
    thumbnail_url: Option<String>,
    thumbnail_half_url: Option<String>,
    trailer_url: String,
    video_url: String,
    categories: BTreeMap<CategoryId, NestedCategory>,
    genres: BTreeMap<GenreId, NestedGenre>,
    cast_members: BTreeMap<CastMemberId, NestedCastMember>,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    notification: Notification,
}

impl Video {
    pub const TITLE_MAX_LENGTH: usize = 255;

    pub fn new(props: VideoProps) -> Self {
        Self {
            video_id: props.video_id,
            title: props.title,
            description: props.description,
            year_launched: props.year_launched,
            duration: props.duration,
            rating: props.rating,
            is_opened: props.is_opened,
            is_published: props.is_published,
            banner_url: props.banner_url,
            thumbnail_url: props.thumbnail_url,
            thumbnail_half_url: props.thumbnail_half_url,
            trailer_url: props.trailer_url,
            video_url: props.video_url,
            categories: props
                .categories
                .into_iter()
                .map(|nested| (*nested.category_id(), nested))
                .collect(),
            genres: props
                .genres
                .into_iter()
                .map(|nested| (*nested.genre_id(), nested))
                .collect(),
            cast_members: props
                .cast_members
                .into_iter()
                .map(|nested| (*nested.cast_member_id(), nested))
                .collect(),
            created_at: props.created_at,
            deleted_at: props.deleted_at,
            notification: Notification::new(),
        }
    }

    pub fn create(props: VideoProps) -> Self {
        let mut video = Self::new(props);
        video.validate(&[]);
        video
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn year_launched(&self) -> i32 {
        self.year_launched
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn is_opened(&self) -> bool {
        self.is_opened
    }

    pub fn is_published(&self) -> bool {
        self.is_published
    }

    pub fn banner_url(&self) -> Option<&str> {
        self.banner_url.as_deref()
    }

    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn thumbnail_half_url(&self) -> Option<&str> {
        self.thumbnail_half_url.as_deref()
    }

    pub fn trailer_url(&self) -> &str {
        &self.trailer_url
    }

    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    pub fn categories(&self) -> impl Iterator<Item = &NestedCategory> {
        self.categories.values()
    }

    pub fn genres(&self) -> impl Iterator<Item = &NestedGenre> {
        self.genres.values()
    }

    pub fn cast_members(&self) -> impl Iterator<Item = &NestedCastMember> {
        self.cast_members.values()
    }

    pub fn change_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.validate(&["title"]);
    }

    pub fn change_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn change_year_launched(&mut self, year_launched: i32) {
        self.year_launched = year_launched;
    }

    pub fn change_duration(&mut self, duration: i32) {
        self.duration = duration;
    }

    pub fn change_rating(&mut self, rating: Rating) {
        self.rating = rating;
    }

    pub fn mark_as_opened(&mut self) {
        self.is_opened = true;
    }

    pub fn mark_as_not_opened(&mut self) {
        self.is_opened = false;
    }

    pub fn publish(&mut self) {
        self.is_published = true;
    }

    pub fn unpublish(&mut self) {
        self.is_published = false;
    }

    pub fn replace_banner_url(&mut self, banner_url: Option<String>) {
        self.banner_url = banner_url;
    }

    pub fn replace_thumbnail_url(&mut self, thumbnail_url: Option<String>) {
        self.thumbnail_url = thumbnail_url;
    }

    pub fn replace_thumbnail_half_url(&mut self, thumbnail_half_url: Option<String>) {
        self.thumbnail_half_url = thumbnail_half_url;
    }

    pub fn replace_trailer_url(&mut self, trailer_url: impl Into<String>) {
        self.trailer_url = trailer_url.into();
    }

    pub fn replace_video_url(&mut self, video_url: impl Into<String>) {
        self.video_url = video_url.into();
    }

    pub fn sync_nested_categories(&mut self, categories: Vec<NestedCategory>) {
        self.categories = categories
            .into_iter()
            .map(|nested| (*nested.category_id(), nested))
            .collect();
        self.validate(&["categories"]);
    }

    pub fn sync_nested_genres(&mut self, genres: Vec<NestedGenre>) {
        self.genres = genres
            .into_iter()
            .map(|nested| (*nested.genre_id(), nested))
            .collect();
        self.validate(&["genres"]);
    }

    pub fn sync_nested_cast_members(&mut self, cast_members: Vec<NestedCastMember>) {
        self.cast_members = cast_members
            .into_iter()
            .map(|nested| (*nested.cast_member_id(), nested))
            .collect();
        self.validate(&["cast_members"]);
    }

    pub fn change_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    pub fn mark_as_deleted(&mut self) {
        self.deleted_at = Some(Utc::now());
    }

    pub fn mark_as_not_deleted(&mut self) {
        self.deleted_at = None;
    }

    fn validator() -> ValidationChain<Video> {
        ValidationChain::new()
            .add_rule(MaxLength::new(
                "title",
                Self::TITLE_MAX_LENGTH,
                |video: &Video| video.title.as_str(),
            ))
            .add_rule(NotEmpty::new("categories", |video: &Video| {
                video.categories.len()
            }))
            .add_rule(NotEmpty::new("genres", |video: &Video| video.genres.len()))
            .add_rule(NotEmpty::new("cast_members", |video: &Video| {
                video.cast_members.len()
            }))
    }

    pub fn validate(&mut self, fields: &[&str]) -> bool {
        let result = Self::validator().validate(self, fields);
        self.notification.copy_errors(&result);
        !result.has_errors()
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoFilter {
    pub video_id: Option<VideoId>,
    pub is_published: Option<bool>,
}

impl VideoFilter {
    pub fn published_by_id(video_id: VideoId) -> Self {
        Self {
            video_id: Some(video_id),
            is_published: Some(true),
        }
    }
}

/// Relation filters match videos holding any of the listed ids; empty means no filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoSearchFilter {
    pub title_or_description: Option<String>,
    pub categories_id: Vec<CategoryId>,
    pub genres_id: Vec<GenreId>,
    pub cast_members_id: Vec<CastMemberId>,
    pub is_published: Option<bool>,
}

fn holds_any<K: Ord, V>(map: &BTreeMap<K, V>, ids: &[K]) -> bool {
    ids.is_empty() || ids.iter().any(|id| map.contains_key(id))
}

impl AggregateRoot for Video {
    type Id = VideoId;
    type Filter = VideoFilter;

    const ENTITY_NAME: &'static str = "Video";
    const SORTABLE_FIELDS: &'static [&'static str] = &["title", "created_at"];

    fn entity_id(&self) -> &VideoId {
        &self.video_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn matches(&self, filter: &VideoFilter) -> bool {
        filter.video_id.map_or(true, |id| id == self.video_id)
            && filter
                .is_published
                .map_or(true, |is_published| is_published == self.is_published)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "title" => Some(self.title.cmp(&other.title)),
            "created_at" => Some(self.created_at.cmp(&other.created_at)),
            _ => None,
        }
    }
}

impl Searchable for Video {
    type SearchFilter = VideoSearchFilter;

    fn matches_search(&self, filter: &VideoSearchFilter) -> bool {
        filter
            .title_or_description
            .as_deref()
            .map_or(true, |text| {
                contains_ignore_case(&self.title, text)
                    || contains_ignore_case(&self.description, text)
            })
            && holds_any(&self.categories, &filter.categories_id)
            && holds_any(&self.genres, &filter.genres_id)
            && holds_any(&self.cast_members, &filter.cast_members_id)
            && filter
                .is_published
                .map_or(true, |is_published| is_published == self.is_published)
    }
}
