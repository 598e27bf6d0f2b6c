use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

use crate::modules::cast_member::domain::CastMemberId;
use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::GenreId;
use crate::modules::video::application::output::VideoOutput;
use crate::modules::video::domain::{VideoRepository, VideoSearchFilter};
use crate::shared::application::pagination::PaginationOutput;
use crate::shared::application::use_case::Query;
use crate::shared::domain::notification::Notification;
use crate::shared::domain::repository::SearchableRepository;
use crate::shared::errors::{AppError, AppResult};

use super::query::{ListVideosQuery, VideoSearchInput};
use super::result::ListVideosResult;

pub struct ListVideosHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl ListVideosHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }

    /// Malformed ids are collected per field into one `SearchValidation`
    fn to_filter(input: VideoSearchInput) -> AppResult<VideoSearchFilter> {
        let mut notification = Notification::new();

        fn parse<I: FromStr>(
            field: &str,
            raw: &[String],
            notification: &mut Notification,
        ) -> Vec<I> {
            let mut parsed = Vec::with_capacity(raw.len());
            for id in raw {
                match id.parse() {
                    Ok(id) => parsed.push(id),
                    Err(_) => notification.add_error(field, format!("{} is not a valid UUID", id)),
                }
            }
            parsed
        }

        let categories_id: Vec<CategoryId> =
            parse("categories_id", &input.categories_id, &mut notification);
        let genres_id: Vec<GenreId> = parse("genres_id", &input.genres_id, &mut notification);
        let cast_members_id: Vec<CastMemberId> =
            parse("cast_members_id", &input.cast_members_id, &mut notification);
        if notification.has_errors() {
            return Err(AppError::SearchValidation(notification.into_errors()));
        }

        Ok(VideoSearchFilter {
            title_or_description: input.title_or_description.filter(|text| !text.is_empty()),
            categories_id,
            genres_id,
            cast_members_id,
            is_published: Some(true),
        })
    }
}

#[async_trait]
impl Query<ListVideosQuery, ListVideosResult> for ListVideosHandler {
    async fn execute(&self, query: ListVideosQuery) -> AppResult<ListVideosResult> {
        let filter = Self::to_filter(query.filter.clone().unwrap_or_default())?;
        let params = query.into_params(Some(filter));

        let result = self
            .video_repository
            .ignore_soft_deleted()
            .search(&params)
            .await?;

        Ok(PaginationOutput::from_search_result(result, |video| {
            VideoOutput::from(&video)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::{CastMemberType, NestedCastMember};
    use crate::modules::category::domain::NestedCategory;
    use crate::modules::genre::domain::NestedGenre;
    use crate::modules::video::domain::{Video, VideoProps};
    use crate::modules::video::infrastructure::VideoInMemoryRepository;
    use crate::shared::domain::notification::ErrorEntry;

    fn video(title: &str, description: &str, genre: &NestedGenre) -> Video {
        Video::create(VideoProps {
            description: description.to_string(),
            is_published: true,
            ..VideoProps::new(
                title,
                vec![NestedCategory::create(CategoryId::new(), "Movie", true, None)],
                vec![genre.clone()],
                vec![NestedCastMember::create(
                    CastMemberId::new(),
                    "Hitchcock",
                    CastMemberType::Director,
                    None,
                )],
            )
        })
    }

    #[tokio::test]
    async fn searches_published_videos_by_text_and_genre() {
        let thriller = NestedGenre::create(GenreId::new(), "Thriller", true, None);
        let comedy = NestedGenre::create(GenreId::new(), "Comedy", true, None);
        let mut unpublished = video("Vertigo Draft", "", &thriller);
        unpublished.unpublish();
        let repository = VideoInMemoryRepository::with_items(vec![
            video("Vertigo", "A detective with acrophobia", &thriller),
            video("Rope", "Two students and a murder", &thriller),
            video("The Trouble with Harry", "A detective-free comedy", &comedy),
            unpublished,
        ]);
        let handler = ListVideosHandler::new(Arc::new(repository));

        let output = handler
            .execute(ListVideosQuery {
                sort: Some("title".to_string()),
                filter: Some(VideoSearchInput {
                    title_or_description: Some("detective".to_string()),
                    genres_id: vec![thriller.genre_id().to_string()],
                    ..VideoSearchInput::default()
                }),
                ..ListVideosQuery::default()
            })
            .await
            .unwrap();

        assert_eq!(output.total, 1);
        assert_eq!(output.items[0].title, "Vertigo");
    }

    #[test]
    fn collects_malformed_ids_per_field() {
        let error = ListVideosHandler::to_filter(VideoSearchInput {
            genres_id: vec!["abc".to_string()],
            cast_members_id: vec!["x".to_string(), "y".to_string()],
            ..VideoSearchInput::default()
        })
        .unwrap_err();

        assert_eq!(
            error,
            AppError::SearchValidation(vec![
                ErrorEntry::field("genres_id", vec!["abc is not a valid UUID".to_string()]),
                ErrorEntry::field(
                    "cast_members_id",
                    vec![
                        "x is not a valid UUID".to_string(),
                        "y is not a valid UUID".to_string()
                    ]
                ),
            ])
        );
    }

    #[test]
    fn always_restricts_to_published_videos() {
        let filter = ListVideosHandler::to_filter(VideoSearchInput {
            title_or_description: Some(String::new()),
            ..VideoSearchInput::default()
        })
        .unwrap();

        assert_eq!(
            filter,
            VideoSearchFilter {
                is_published: Some(true),
                ..VideoSearchFilter::default()
            }
        );
    }
}
