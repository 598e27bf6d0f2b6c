use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::video::domain::{Video, VideoId, VideoRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::command::DeleteVideoCommand;

pub struct DeleteVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl DeleteVideoHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }
}

#[async_trait]
impl UseCase<DeleteVideoCommand, ()> for DeleteVideoHandler {
    async fn execute(&self, command: DeleteVideoCommand) -> AppResult<()> {
        LogContext::use_case("DeleteVideo", &command.id);
        let video_id: VideoId = command.id.parse()?;

        let mut video = self
            .video_repository
            .find_by_id(&video_id)
            .await?
            .ok_or_else(|| AppError::not_found(Video::ENTITY_NAME, &[video_id]))?;

        video.mark_as_deleted();
        self.video_repository.update(&video).await?;
        info!("Video {} soft deleted", video_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::video::infrastructure::VideoInMemoryRepository;

    #[tokio::test]
    async fn unknown_video_is_not_found() {
        let handler = DeleteVideoHandler::new(Arc::new(VideoInMemoryRepository::new()));
        let id = VideoId::new();

        let error = handler
            .execute(DeleteVideoCommand::new(id.to_string()))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            AppError::NotFound(format!("Video Not Found using ID {}", id))
        );
    }

    #[tokio::test]
    async fn malformed_id_is_rejected() {
        let handler = DeleteVideoHandler::new(Arc::new(VideoInMemoryRepository::new()));

        let error = handler
            .execute(DeleteVideoCommand::new("not-a-uuid"))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::InvalidUuid(_)));
    }
}
