use async_trait::async_trait;
use log::info;
use std::sync::Arc;

use crate::modules::cast_member::domain::{
    CastMember, CastMemberId, CastMemberProps, CastMemberRepository, CastMemberType,
};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;

use super::{command::SaveCastMemberCommand, result::SaveCastMemberResult};

/// Creates the cast member when its id is unknown, otherwise overwrites it
pub struct SaveCastMemberHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl SaveCastMemberHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }

    fn parse_type(code: i32) -> AppResult<CastMemberType> {
        CastMemberType::try_from(code).map_err(|error| {
            let mut notification = Notification::new();
            notification.add_error("type", error.to_string());
            AppError::entity_validation(&notification)
        })
    }
}

#[async_trait]
impl UseCase<SaveCastMemberCommand, SaveCastMemberResult> for SaveCastMemberHandler {
    async fn execute(&self, command: SaveCastMemberCommand) -> AppResult<SaveCastMemberResult> {
        LogContext::use_case("SaveCastMember", &command.cast_member_id);
        let cast_member_id: CastMemberId = command.cast_member_id.parse()?;
        let cast_member_type = Self::parse_type(command.cast_member_type)?;

        let existing = self
            .cast_member_repository
            .find_by_id(&cast_member_id)
            .await?;
        let created = existing.is_none();

        let cast_member = match existing {
            Some(mut cast_member) => {
                cast_member.change_name(command.name);
                cast_member.change_type(cast_member_type);
                cast_member.change_created_at(command.created_at);
                cast_member
            }
            None => CastMember::create(CastMemberProps {
                cast_member_id,
                name: command.name,
                cast_member_type,
                created_at: command.created_at,
                deleted_at: None,
            }),
        };
        if cast_member.notification().has_errors() {
            return Err(AppError::entity_validation(cast_member.notification()));
        }

        if created {
            self.cast_member_repository.insert(&cast_member).await?;
            info!("Cast member {} created", cast_member_id);
        } else {
            self.cast_member_repository.update(&cast_member).await?;
            info!("Cast member {} updated", cast_member_id);
        }
        Ok(SaveCastMemberResult::new(cast_member_id.to_string(), created))
    }
}
