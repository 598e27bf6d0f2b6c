use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use super::cast_member_type::CastMemberType;
use crate::shared::domain::aggregate::{contains_ignore_case, AggregateRoot, Searchable};
use crate::shared::domain::notification::Notification;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::{MaxLength, ValidationChain};

crate::entity_id!(
    /// Identity of a [`CastMember`]
    CastMemberId
);

#[derive(Debug, Clone)]
pub struct CastMemberProps {
    pub cast_member_id: CastMemberId,
    pub name: String,
    pub cast_member_type: CastMemberType,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CastMemberProps {
    pub fn new(name: impl Into<String>, cast_member_type: CastMemberType) -> Self {
        Self {
            cast_member_id: CastMemberId::new(),
            name: name.into(),
            cast_member_type,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CastMember {
    cast_member_id: CastMemberId,
    name: String,
    cast_member_type: CastMemberType,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    notification: Notification,
}

impl CastMember {
    pub const NAME_MAX_LENGTH: usize = 255;

    pub fn new(props: CastMemberProps) -> Self {
        Self {
            cast_member_id: props.cast_member_id,
            name: props.name,
            cast_member_type: props.cast_member_type,
            created_at: props.created_at,
            deleted_at: props.deleted_at,
            notification: Notification::new(),
        }
    }

    pub fn create(props: CastMemberProps) -> Self {
        let mut cast_member = Self::new(props);
        cast_member.validate(&["name"]);
        cast_member
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

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(&["name"]);
    }

    pub fn change_type(&mut self, cast_member_type: CastMemberType) {
        self.cast_member_type = cast_member_type;
    }

    pub fn change_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    pub fn mark_as_deleted(&mut self) {
        self.deleted_at = Some(Utc::now());
    }

    pub fn mark_as_not_deleted(&mut self) {
        self.deleted_at = None;
    }

    pub fn validate(&mut self, fields: &[&str]) -> bool {
        let result = ValidationChain::new()
            .add_rule(MaxLength::new(
                "name",
                Self::NAME_MAX_LENGTH,
                |cast_member: &CastMember| cast_member.name.as_str(),
            ))
            .validate(self, fields);
        self.notification.copy_errors(&result);
        !result.has_errors()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CastMemberFilter {
    pub cast_member_id: Option<CastMemberId>,
    pub name: Option<String>,
    pub cast_member_type: Option<CastMemberType>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CastMemberSearchFilter {
    pub name: Option<String>,
    pub cast_member_type: Option<CastMemberType>,
}

impl CastMemberSearchFilter {
    /// Build from caller input; an unknown type code fails with `SearchValidation`.
    /// A zero code means no type filter.
    pub fn from_raw(name: Option<String>, cast_member_type: Option<i32>) -> AppResult<Self> {
        let cast_member_type = match cast_member_type {
            None | Some(0) => None,
            Some(code) => Some(CastMemberType::try_from(code).map_err(|error| {
                let mut notification = Notification::new();
                notification.add_error("type", error.to_string());
                AppError::SearchValidation(notification.into_errors())
            })?),
        };

        Ok(Self {
            name: name.filter(|name| !name.is_empty()),
            cast_member_type,
        })
    }
}

impl AggregateRoot for CastMember {
    type Id = CastMemberId;
    type Filter = CastMemberFilter;

    const ENTITY_NAME: &'static str = "CastMember";
    const SORTABLE_FIELDS: &'static [&'static str] = &["name", "created_at"];

    fn entity_id(&self) -> &CastMemberId {
        &self.cast_member_id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }

    fn notification(&self) -> &Notification {
        &self.notification
    }

    fn matches(&self, filter: &CastMemberFilter) -> bool {
        filter
            .cast_member_id
            .map_or(true, |id| id == self.cast_member_id)
            && filter.name.as_ref().map_or(true, |name| *name == self.name)
            && filter
                .cast_member_type
                .map_or(true, |kind| kind == self.cast_member_type)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "name" => Some(self.name.cmp(&other.name)),
            "created_at" => Some(self.created_at.cmp(&other.created_at)),
            _ => None,
        }
    }
}

impl Searchable for CastMember {
    type SearchFilter = CastMemberSearchFilter;

    fn matches_search(&self, filter: &CastMemberSearchFilter) -> bool {
        filter
            .name
            .as_deref()
            .map_or(true, |name| contains_ignore_case(&self.name, name))
            && filter
                .cast_member_type
                .map_or(true, |kind| kind == self.cast_member_type)
    }
}
