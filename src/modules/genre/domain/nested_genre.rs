use chrono::{DateTime, Utc};

use super::genre::{Genre, GenreId};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::validation::{MaxLength, ValidationChain};

/// Snapshot of a genre embedded in videos
#[derive(Debug, Clone, PartialEq)]
pub struct NestedGenre {
    genre_id: GenreId,
    name: String,
    is_active: bool,
    deleted_at: Option<DateTime<Utc>>,
    notification: Notification,
}

impl NestedGenre {
    pub fn create(
        genre_id: GenreId,
        name: impl Into<String>,
        is_active: bool,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        let mut nested = Self {
            genre_id,
            name: name.into(),
            is_active,
            deleted_at,
            notification: Notification::new(),
        };
        nested.validate();
        nested
    }

    pub fn genre_id(&self) -> &GenreId {
        &self.genre_id
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

    pub fn validate(&mut self) -> bool {
        let result = ValidationChain::new()
            .add_rule(MaxLength::new(
                "name",
                Genre::NAME_MAX_LENGTH,
                |nested: &NestedGenre| nested.name.as_str(),
            ))
            .validate(self, &[]);
        self.notification.copy_errors(&result);
        !result.has_errors()
    }
}

impl From<&Genre> for NestedGenre {
    fn from(genre: &Genre) -> Self {
        Self::create(
            *genre.genre_id(),
            genre.name(),
            genre.is_active(),
            genre.deleted_at(),
        )
    }
}
