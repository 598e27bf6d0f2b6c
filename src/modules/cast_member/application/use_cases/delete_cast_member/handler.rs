use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMember, CastMemberId, CastMemberRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::command::DeleteCastMemberCommand;

/// Soft deletes a cast member; videos keep their snapshot flagged as deleted
pub struct DeleteCastMemberHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl DeleteCastMemberHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteCastMemberCommand, ()> for DeleteCastMemberHandler {
    async fn execute(&self, command: DeleteCastMemberCommand) -> AppResult<()> {
        LogContext::use_case("DeleteCastMember", &command.id);
        let cast_member_id: CastMemberId = command.id.parse()?;

        let mut cast_member = self
            .cast_member_repository
            .find_by_id(&cast_member_id)
            .await?
            .ok_or_else(|| AppError::not_found(CastMember::ENTITY_NAME, &[cast_member_id]))?;

        cast_member.mark_as_deleted();
        self.cast_member_repository.update(&cast_member).await?;
        info!("Cast member {} soft deleted", cast_member_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::{CastMemberProps, CastMemberType};
    use crate::modules::cast_member::infrastructure::CastMemberInMemoryRepository;

    #[tokio::test]
    async fn marks_cast_member_as_deleted() {
        let cast_member =
            CastMember::create(CastMemberProps::new("Kubrick", CastMemberType::Director));
        let id = cast_member.cast_member_id().to_string();
        let repository = CastMemberInMemoryRepository::with_items(vec![cast_member]);
        let handler = DeleteCastMemberHandler::new(Arc::new(repository.clone()));

        handler.execute(DeleteCastMemberCommand::new(id)).await.unwrap();

        assert!(repository.items().await[0].is_deleted());
    }

    #[tokio::test]
    async fn unknown_cast_member_is_not_found() {
        let handler = DeleteCastMemberHandler::new(Arc::new(CastMemberInMemoryRepository::new()));
        let id = CastMemberId::new();

        let error = handler
            .execute(DeleteCastMemberCommand::new(id.to_string()))
            .await
            .unwrap_err();

        assert_eq!(error, AppError::not_found("CastMember", &[id]));
    }
}
