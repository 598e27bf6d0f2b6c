use crate::shared::errors::AppResult;
/// Base trait for all use cases following CQRS pattern
///
/// Commands change catalog state, queries only read it. Handlers hold their
/// repositories behind `Arc<dyn ...Repository>`.
///
/// # Example
///
/// ```ignore
/// struct DeleteCategoryHandler {
///     category_repository: Arc<dyn CategoryRepository>,
/// }
///
/// #[async_trait]
/// impl UseCase<DeleteCategoryCommand, ()> for DeleteCategoryHandler {
///     async fn execute(&self, command: DeleteCategoryCommand) -> AppResult<()> {
///         // Use case logic here
///     }
/// }
/// ```
use async_trait::async_trait;

/// Base trait for use cases (command handlers)
#[async_trait]
pub trait UseCase<TCommand, TResult> {
    /// Execute the use case with the given command
    async fn execute(&self, command: TCommand) -> AppResult<TResult>;
}

/// Base trait for queries (query handlers)
#[async_trait]
pub trait Query<TQuery, TResult> {
    /// Execute the query
    async fn execute(&self, query: TQuery) -> AppResult<TResult>;
}
