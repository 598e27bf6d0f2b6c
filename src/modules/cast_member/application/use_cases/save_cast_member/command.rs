use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SaveCastMemberCommand {
    pub cast_member_id: String,
    pub name: String,
    /// Raw type code, `1` director or `2` actor
    #[serde(rename = "type")]
    pub cast_member_type: i32,
    pub created_at: DateTime<Utc>,
}

impl SaveCastMemberCommand {
    pub fn new(
        cast_member_id: impl Into<String>,
        name: impl Into<String>,
        cast_member_type: i32,
    ) -> Self {
        Self {
            cast_member_id: cast_member_id.into(),
            name: name.into(),
            cast_member_type,
            created_at: Utc::now(),
        }
    }
}
