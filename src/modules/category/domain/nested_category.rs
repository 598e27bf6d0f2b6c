use chrono::{DateTime, Utc};

use super::category::{Category, CategoryId};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::validation::{MaxLength, ValidationChain};

/// Snapshot of a category embedded in genres and videos
#[derive(Debug, Clone, PartialEq)]
pub struct NestedCategory {
    category_id: CategoryId,
    name: String,
    is_active: bool,
    deleted_at: Option<DateTime<Utc>>,
    notification: Notification,
}

impl NestedCategory {
    pub fn new(
        category_id: CategoryId,
        name: impl Into<String>,
        is_active: bool,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            category_id,
            name: name.into(),
            is_active,
            deleted_at,
            notification: Notification::new(),
        }
    }

    pub fn create(
        category_id: CategoryId,
        name: impl Into<String>,
        is_active: bool,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        let mut nested = Self::new(category_id, name, is_active, deleted_at);
        nested.validate();
        nested
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
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

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    pub fn mark_as_deleted(&mut self) {
        self.deleted_at = Some(Utc::now());
    }

    pub fn mark_as_not_deleted(&mut self) {
        self.deleted_at = None;
    }

    pub fn validate(&mut self) -> bool {
        let result = ValidationChain::new()
            .add_rule(MaxLength::new(
                "name",
                Category::NAME_MAX_LENGTH,
                |nested: &NestedCategory| nested.name.as_str(),
            ))
            .validate(self, &[]);
        self.notification.copy_errors(&result);
        !result.has_errors()
    }
}

impl From<&Category> for NestedCategory {
    fn from(category: &Category) -> Self {
        Self::create(
            *category.category_id(),
            category.name(),
            category.is_active(),
            category.deleted_at(),
        )
    }
}
