use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::cast_member::application::output::CastMemberOutput;
use crate::modules::cast_member::domain::{CastMemberRepository, CastMemberSearchFilter};
use crate::shared::application::pagination::PaginationOutput;
use crate::shared::application::use_case::Query;
use crate::shared::domain::repository::SearchableRepository;
use crate::shared::errors::AppResult;

use super::{query::ListCastMembersQuery, result::ListCastMembersResult};

pub struct ListCastMembersHandler {
    cast_member_repository: Arc<dyn CastMemberRepository>,
}

impl ListCastMembersHandler {
    pub fn new(cast_member_repository: Arc<dyn CastMemberRepository>) -> Self {
        Self {
            cast_member_repository,
        }
    }
}

#[async_trait]
impl Query<ListCastMembersQuery, ListCastMembersResult> for ListCastMembersHandler {
    async fn execute(&self, query: ListCastMembersQuery) -> AppResult<ListCastMembersResult> {
        let input = query.filter.clone().unwrap_or_default();
        let filter = CastMemberSearchFilter::from_raw(input.name, input.cast_member_type)?;
        let params = query.into_params(Some(filter));

        let result = self
            .cast_member_repository
            .ignore_soft_deleted()
            .search(&params)
            .await?;

        Ok(PaginationOutput::from_search_result(result, |cast_member| {
            CastMemberOutput::from(&cast_member)
        }))
    }
}
