use async_trait::async_trait;
use std::sync::Arc;

use super::category::{Category, CategoryId};
use crate::shared::domain::repository::SearchableRepository;
use crate::shared::errors::AppResult;

/// Category persistence port.
///
/// Scoped views are new handles over the same storage; the receiver keeps
/// its own scopes.
#[async_trait]
pub trait CategoryRepository: SearchableRepository<Category> {
    /// View that hides soft deleted categories
    fn ignore_soft_deleted(&self) -> Arc<dyn CategoryRepository>;

    /// View without any scope
    fn clear_scopes(&self) -> Arc<dyn CategoryRepository>;

    /// Whether the category is the only active one of some non-deleted genre or video
    async fn has_only_one_activate_in_related(&self, category_id: &CategoryId)
        -> AppResult<bool>;

    /// Whether the category is the only non-deleted one of some non-deleted genre or video
    async fn has_only_one_not_deleted_in_related(
        &self,
        category_id: &CategoryId,
    ) -> AppResult<bool>;
}
