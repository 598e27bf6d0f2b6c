use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::output::CastMemberOutput;
use crate::modules::cast_member::domain::{CastMemberFilter, CastMemberRepository};
use crate::shared::application::use_case::Query;
use crate::shared::domain::repository::{Repository, SortOrder};
use crate::shared::errors::AppResult;

use super::query::ListAllCastMembersQuery;

pub struct ListAllCastMembersHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl ListAllCastMembersHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl Query<ListAllCastMembersQuery, Vec<CastMemberOutput>> for ListAllCastMembersHandler {
    async fn execute(&self, _query: ListAllCastMembersQuery) -> AppResult<Vec<CastMemberOutput>> {
        let cast_members = self
            .cast_member_repository
            .ignore_soft_deleted()
            .find_by(&CastMemberFilter::default(), Some(SortOrder::asc("name")))
            .await?;

        Ok(cast_members.iter().map(CastMemberOutput::from).collect())
    }
}
