use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::cast_member::domain::{CastMember, CastMemberId};
use crate::shared::domain::aggregate::AggregateRoot;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastMemberOutput {
    pub id: CastMemberId,
    pub name: String,
    #[serde(rename = "type")]
    pub cast_member_type: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&CastMember> for CastMemberOutput {
    fn from(cast_member: &CastMember) -> Self {
        Self {
            id: *cast_member.cast_member_id(),
            name: cast_member.name().to_string(),
            cast_member_type: cast_member.cast_member_type().as_i32(),
            created_at: cast_member.created_at(),
        }
    }
}

impl From<CastMember> for CastMemberOutput {
    fn from(cast_member: CastMember) -> Self {
        Self::from(&cast_member)
    }
}
