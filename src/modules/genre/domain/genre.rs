use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::modules::category::domain::{CategoryId, NestedCategory};
use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::notification::Notification;
use crate::shared::validation::{MaxLength, NotEmpty, ValidationChain};

crate::entity_id!(
    /// Identity of a [`Genre`]
    GenreId
);

#[derive(Debug, Clone)]
pub struct GenreProps {
    pub genre_id: GenreId,
    pub name: String,
    pub categories: Vec<NestedCategory>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl GenreProps {
    pub fn new(name: impl Into<String>, categories: Vec<NestedCategory>) -> Self {
        Self {
            genre_id: GenreId::new(),
            name: name.into(),
            categories,
            is_active: true,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }
}

/// A genre groups videos and belongs to one or more categories, embedded as
/// snapshots keyed by category id.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    genre_id: GenreId,
    name: String,
    categories: BTreeMap<CategoryId, NestedCategory>,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    notification: Notification,
}

impl Genre {
    pub const NAME_MAX_LENGTH: usize = 255;

    pub fn new(props: GenreProps) -> Self {
        Self {
            genre_id: props.genre_id,
            name: props.name,
            categories: Self::keyed(props.categories),
            is_active: props.is_active,
            created_at: props.created_at,
            deleted_at: props.deleted_at,
            notification: Notification::new(),
        }
    }

    pub fn create(props: GenreProps) -> Self {
        let mut genre = Self::new(props);
        genre.validate(&[]);
        genre
    }

    fn keyed(categories: Vec<NestedCategory>) -> BTreeMap<CategoryId, NestedCategory> {
        categories
            .into_iter()
            .map(|nested| (*nested.category_id(), nested))
            .collect()
    }

    pub fn genre_id(&self) -> &GenreId {
        &self.genre_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn categories(&self) -> impl Iterator<Item = &NestedCategory> {
        self.categories.values()
    }

    pub fn categories_ids(&self) -> Vec<CategoryId> {
        self.categories.keys().copied().collect()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(&["name"]);
    }

    /// Replace the whole category set
    pub fn sync_nested_categories(&mut self, categories: Vec<NestedCategory>) {
        self.categories = Self::keyed(categories);
        self.validate(&["categories"]);
    }

    pub fn add_nested_category(&mut self, category: NestedCategory) {
        self.categories.insert(*category.category_id(), category);
    }

    pub fn remove_nested_category(&mut self, category_id: &CategoryId) {
        self.categories.remove(category_id);
        self.validate(&["categories"]);
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
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

    fn validator() -> ValidationChain<Genre> {
        ValidationChain::new()
            .add_rule(MaxLength::new("name", Self::NAME_MAX_LENGTH, |genre: &Genre| {
                genre.name.as_str()
            }))
            .add_rule(NotEmpty::new("categories", |genre: &Genre| {
                genre.categories.len()
            }))
    }

    pub fn validate(&mut self, fields: &[&str]) -> bool {
        let result = Self::validator().validate(self, fields);
        self.notification.copy_errors(&result);
        !result.has_errors()
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreFilter {
    pub genre_id: Option<GenreId>,
    pub is_active: Option<bool>,
}

impl GenreFilter {
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }

    pub fn active_by_id(genre_id: GenreId) -> Self {
        Self {
            genre_id: Some(genre_id),
            is_active: Some(true),
        }
    }
}

impl AggregateRoot for Genre {
    type Id = GenreId;
    type Filter = GenreFilter;

    const ENTITY_NAME: &'static str = "Genre";
    const SORTABLE_FIELDS: &'static [&'static str] = &["name", "created_at"];

    fn entity_id(&self) -> &GenreId {
        &self.genre_id
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

    fn matches(&self, filter: &GenreFilter) -> bool {
        filter.genre_id.map_or(true, |id| id == self.genre_id)
            && filter
                .is_active
                .map_or(true, |is_active| is_active == self.is_active)
    }

    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering> {
        match field {
            "name" => Some(self.name.cmp(&other.name)),
            "created_at" => Some(self.created_at.cmp(&other.created_at)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(name: &str) -> NestedCategory {
        NestedCategory::create(CategoryId::new(), name, true, None)
    }

    #[test]
    fn create_requires_categories() {
        let genre = Genre::create(GenreProps::new("Action", vec![]));

        assert_eq!(
            genre.notification().messages_for("categories"),
            Some(&["categories should not be empty".to_string()][..])
        );
    }

    #[test]
    fn sync_replaces_category_set() {
        let first = nested("Movie");
        let mut genre = Genre::create(GenreProps::new("Action", vec![first.clone()]));
        let second = nested("Series");

        genre.sync_nested_categories(vec![second.clone()]);

        assert_eq!(genre.categories_ids(), vec![*second.category_id()]);
        assert!(!genre.notification().has_errors());
    }

    #[test]
    fn add_and_remove_nested_categories() {
        let first = nested("Movie");
        let second = nested("Series");
        let mut genre = Genre::create(GenreProps::new("Action", vec![first.clone()]));

        genre.add_nested_category(second.clone());
        assert_eq!(genre.categories().count(), 2);

        genre.remove_nested_category(first.category_id());
        genre.remove_nested_category(second.category_id());
        assert!(genre.notification().messages_for("categories").is_some());
    }

    #[test]
    fn same_category_is_kept_once() {
        let category = nested("Movie");
        let genre = Genre::create(GenreProps::new(
            "Action",
            vec![category.clone(), category],
        ));

        assert_eq!(genre.categories().count(), 1);
    }
}
