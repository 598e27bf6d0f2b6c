use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::output::VideoOutput;
use crate::modules::video::domain::{Video, VideoFilter, VideoId, VideoRepository};
use crate::shared::application::use_case::Query;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};

use super::query::GetVideoQuery;

/// Fetches a published, non-deleted video
pub struct GetVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl GetVideoHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }
}

#[async_trait]
impl Query<GetVideoQuery, VideoOutput> for GetVideoHandler {
    async fn execute(&self, query: GetVideoQuery) -> AppResult<VideoOutput> {
        let video_id: VideoId = query.id.parse()?;

        self.video_repository
            .ignore_soft_deleted()
            .find_one_by(&VideoFilter::published_by_id(video_id))
            .await?
            .map(VideoOutput::from)
            .ok_or_else(|| AppError::not_found(Video::ENTITY_NAME, &[video_id]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::{
        CastMemberId, CastMemberType, NestedCastMember,
    };
    use crate::modules::category::domain::{CategoryId, NestedCategory};
    use crate::modules::genre::domain::{GenreId, NestedGenre};
    use crate::modules::video::domain::VideoProps;
    use crate::modules::video::infrastructure::VideoInMemoryRepository;

    fn video(title: &str, is_published: bool) -> Video {
        Video::create(VideoProps {
            is_published,
            ..VideoProps::new(
                title,
                vec![NestedCategory::create(CategoryId::new(), "Movie", true, None)],
                vec![NestedGenre::create(GenreId::new(), "Drama", true, None)],
                vec![NestedCastMember::create(
                    CastMemberId::new(),
                    "Welles",
                    CastMemberType::Actor,
                    None,
                )],
            )
        })
    }

    #[tokio::test]
    async fn only_published_videos_are_visible() {
        let published = video("Citizen Kane", true);
        let draft = video("The Other Side of the Wind", false);
        let mut deleted = video("It's All True", true);
        deleted.mark_as_deleted();
        let expected = VideoOutput::from(&published);
        let hidden = [draft.video_id().to_string(), deleted.video_id().to_string()];
        let repository = VideoInMemoryRepository::with_items(vec![published, draft, deleted]);
        let handler = GetVideoHandler::new(Arc::new(repository));

        let output = handler
            .execute(GetVideoQuery::new(expected.id.to_string()))
            .await
            .unwrap();

        assert_eq!(output, expected);
        assert_eq!(output.cast_members[0].name, "Welles");
        for id in hidden {
            let error = handler.execute(GetVideoQuery::new(id)).await.unwrap_err();
            assert!(matches!(error, AppError::NotFound(_)));
        }
    }
}
