/// Shared domain building blocks: identity, notification, aggregate contracts
/// and the repository abstractions every bounded context implements.
pub mod aggregate;
pub mod notification;
pub mod repository;
pub mod value_objects;

pub use aggregate::{AggregateRoot, Searchable};
pub use notification::{ErrorEntry, Notification};
