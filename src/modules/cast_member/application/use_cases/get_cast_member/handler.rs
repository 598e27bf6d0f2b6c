use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::output::CastMemberOutput;
use crate::modules::cast_member::domain::{CastMember, CastMemberId, CastMemberRepository};
use crate::shared::application::use_case::Query;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Repository;
use crate::shared::errors::{AppError, AppResult};

use super::query::GetCastMemberQuery;

pub struct GetCastMemberHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl GetCastMemberHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl Query<GetCastMemberQuery, CastMemberOutput> for GetCastMemberHandler {
    async fn execute(&self, query: GetCastMemberQuery) -> AppResult<CastMemberOutput> {
        let cast_member_id: CastMemberId = query.id.parse()?;

        self.cast_member_repository
            .ignore_soft_deleted()
            .find_by_id(&cast_member_id)
            .await?
            .map(CastMemberOutput::from)
            .ok_or_else(|| AppError::not_found(CastMember::ENTITY_NAME, &[cast_member_id]))
    }
}
