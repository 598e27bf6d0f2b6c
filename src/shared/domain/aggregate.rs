use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::fmt::Debug;

use super::notification::Notification;
use super::value_objects::EntityId;

/// Contract every catalog aggregate fulfils so the generic repositories can
/// store, scope, filter and sort it.
pub trait AggregateRoot: Clone + Debug + Send + Sync + 'static {
    type Id: EntityId;
    /// Equality filter used by `find_by` / `find_one_by`
    type Filter: Debug + Send + Sync;

    const ENTITY_NAME: &'static str;
    const SORTABLE_FIELDS: &'static [&'static str];

    fn entity_id(&self) -> &Self::Id;
    fn created_at(&self) -> DateTime<Utc>;
    fn deleted_at(&self) -> Option<DateTime<Utc>>;
    fn notification(&self) -> &Notification;

    /// In-memory evaluation of a find filter
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Ordering on one of `SORTABLE_FIELDS`, `None` for anything else
    fn compare_by(&self, other: &Self, field: &str) -> Option<Ordering>;

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Aggregates exposed through paginated search
pub trait Searchable: AggregateRoot {
    type SearchFilter: Clone + Debug + Send + Sync;

    fn matches_search(&self, filter: &Self::SearchFilter) -> bool;
}

/// Case-insensitive containment used by the in-memory search filters
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
