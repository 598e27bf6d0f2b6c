pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CategoryOutput;
pub use domain::{Category, CategoryId, CategoryRepository, NestedCategory};
pub use infrastructure::{CategoryElasticSearchRepository, CategoryInMemoryRepository};
