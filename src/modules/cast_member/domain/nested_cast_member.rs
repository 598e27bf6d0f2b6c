use chrono::{DateTime, Utc};

use super::cast_member::{CastMember, CastMemberId};
use super::cast_member_type::CastMemberType;
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::validation::{MaxLength, ValidationChain};

/// Snapshot of a cast member embedded in videos
#[derive(Debug, Clone, PartialEq)]
pub struct NestedCastMember {
    cast_member_id: CastMemberId,
    name: String,
    cast_member_type: CastMemberType,
    deleted_at: Option<DateTime<Utc>>,
    notification: Notification,
}

impl NestedCastMember {
    pub fn create(
        cast_member_id: CastMemberId,
        name: impl Into<String>,
        cast_member_type: CastMemberType,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        let mut nested = Self {
            cast_member_id,
            name: name.into(),
            cast_member_type,
            deleted_at,
            notification: Notification::new(),
        };
        nested.validate();
        nested
    }

    pub fn cast_member_id(&self) -> &CastMemberId {
        &self.cast_member_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cast_member_type(&self) -> CastMemberType {
        self.cast_member_type
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    pub fn validate(&mut self) -> bool {
        let result = ValidationChain::new()
            .add_rule(MaxLength::new(
                "name",
                CastMember::NAME_MAX_LENGTH,
                |nested: &NestedCastMember| nested.name.as_str(),
            ))
            .validate(self, &[]);
        self.notification.copy_errors(&result);
        !result.has_errors()
    }
}

impl From<&CastMember> for NestedCastMember {
    fn from(cast_member: &CastMember) -> Self {
        Self::create(
            *cast_member.cast_member_id(),
            cast_member.name(),
            cast_member.cast_member_type(),
            cast_member.deleted_at(),
        )
    }
}
