use crate::shared::domain::aggregate::AggregateRoot;
use crate::shared::domain::repository::Criteria;

/// Drops soft-deleted aggregates from an in-memory collection
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftDeleteInMemoryCriteria;

impl<E: AggregateRoot> Criteria<Vec<E>> for SoftDeleteInMemoryCriteria {
    fn apply(&self, items: Vec<E>) -> Vec<E> {
        items.into_iter().filter(|item| !item.is_deleted()).collect()
    }
}
