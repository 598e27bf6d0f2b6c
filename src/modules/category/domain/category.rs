use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::shared::domain::aggregate::{contains_ignore_case, AggregateRoot, Searchable};
use crate::shared::domain::notification::Notification;
use crate::shared::validation::{MaxLength, ValidationChain};

crate::entity_id!(
    /// Identity of a [`Category`]
    CategoryId
);

/// Everything needed to build a [`Category`]
#[derive(Debug, Clone)]
pub struct CategoryProps {
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            category_id: CategoryId::new(),
            name: name.into(),
            description: None,
            is_active: true,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
    notification: Notification,
}

impl Category {
    pub const NAME_MAX_LENGTH: usize = 255;

    /// Rebuild a category as stored, without running validation
    pub fn new(props: CategoryProps) -> Self {
        Self {
            category_id: props.category_id,
            name: props.name,
            description: props.description,
            is_active: props.is_active,
            created_at: props.created_at,
            deleted_at: props.deleted_at,
            notification: Notification::new(),
        }
    }

    /// Build a new category and validate its name
    pub fn create(props: CategoryProps) -> Self {
        let mut category = Self::new(props);
        category.validate(&["name"]);
        category
    }

    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn change_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.validate(&["name"]);
    }

    pub fn change_description(&mut self, description: Option<String>) {
        self.description = description;
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

    fn validator() -> ValidationChain<Category> {
        ValidationChain::new().add_rule(MaxLength::new(
            "name",
            Self::NAME_MAX_LENGTH,
            |category: &Category| category.name.as_str(),
        ))
    }

    /// Run the rules of `fields` (all rules when empty), recording failures.
    pub fn validate(&mut self, fields: &[&str]) -> bool {
        let result = Self::validator().validate(self, fields);
        self.notification.copy_errors(&result);
        !result.has_errors()
    }

    pub fn notification_mut(&mut self) -> &mut Notification {
        &mut self.notification
    }
}

/// Equality filter for `find_by` / `find_one_by`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFilter {
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryFilter {
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }

    pub fn active_by_id(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            is_active: Some(true),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySearchFilter {
    pub name: Option<String>,
    pub is_active: Option<bool>,
}

impl AggregateRoot for Category {
    type Id = CategoryId;
    type Filter = CategoryFilter;

    const ENTITY_NAME: &'static str = "Category";
    const SORTABLE_FIELDS: &'static [&'static str] = &["name", "created_at"];

    fn entity_id(&self) -> &CategoryId {
        &self.category_id
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

    fn matches(&self, filter: &CategoryFilter) -> bool {
        filter
            .category_id
            .map_or(true, |id| id == self.category_id)
            && filter.name.as_ref().map_or(true, |name| *name == self.name)
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

impl Searchable for Category {
    type SearchFilter = CategorySearchFilter;

    fn matches_search(&self, filter: &CategorySearchFilter) -> bool {
        filter
            .name
            .as_deref()
            .map_or(true, |name| contains_ignore_case(&self.name, name))
            && filter
                .is_active
                .map_or(true, |is_active| is_active == self.is_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn create_keeps_props_and_starts_valid() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let props = CategoryProps {
            description: Some("Movie description".to_string()),
            is_active: false,
            created_at,
            ..CategoryProps::new("Movie")
        };

        let category = Category::create(props);

        assert_eq!(category.name(), "Movie");
        assert_eq!(category.description(), Some("Movie description"));
        assert!(!category.is_active());
        assert_eq!(AggregateRoot::created_at(&category), created_at);
        assert!(!category.notification().has_errors());
    }

    #[test]
    fn name_longer_than_limit_is_reported() {
        let mut category = Category::create(CategoryProps::new("Movie"));

        category.change_name("t".repeat(256));

        assert_eq!(
            category.notification().messages_for("name"),
            Some(&["name must be shorter than or equal to 255 characters".to_string()][..])
        );
    }

    #[test]
    fn soft_delete_marks_round_trip() {
        let mut category = Category::create(CategoryProps::new("Movie"));

        category.mark_as_deleted();
        assert!(category.is_deleted());

        category.mark_as_not_deleted();
        assert!(category.deleted_at().is_none());
    }

    #[test]
    fn filters_match_on_every_set_field() {
        let category = Category::create(CategoryProps::new("Documentary"));

        assert!(category.matches(&CategoryFilter::active()));
        assert!(!category.matches(&CategoryFilter {
            name: Some("documentary".to_string()),
            ..CategoryFilter::default()
        }));
        assert!(category.matches_search(&CategorySearchFilter {
            name: Some("MENT".to_string()),
            is_active: Some(true),
        }));
    }
}
