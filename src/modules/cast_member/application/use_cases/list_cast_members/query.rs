use serde::{Deserialize, Serialize};

use crate::shared::application::pagination::SearchInput;

/// Unvalidated search filter; `cast_member_type` is the raw type code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CastMemberSearchInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub cast_member_type: Option<i32>,
}

pub type ListCastMembersQuery = SearchInput<CastMemberSearchInput>;
