use std::sync::Arc;

use super::cast_member::CastMember;
use crate::shared::domain::repository::SearchableRepository;

pub trait CastMemberRepository: SearchableRepository<CastMember> {
    fn ignore_soft_deleted(&self) -> Arc<dyn CastMemberRepository>;
    fn clear_scopes(&self) -> Arc<dyn CastMemberRepository>;
}
