//! Persistence on the search engine: one index holds every document kind,
//! told apart by the `type` field.

pub mod client;
pub mod criteria;
pub mod mapper;
pub mod mapping;
pub mod query;
pub mod repository;
pub mod retry;
pub mod store;

pub use client::ElasticsearchClient;
pub use criteria::SoftDeleteElasticSearchCriteria;
pub use mapper::{DocumentMapper, NestedRelation, NestedSnapshot, SearchableDocumentMapper};
pub use repository::{is_active_entry, is_not_deleted_entry, ElasticSearchRepository};
pub use retry::{RetryConfig, RetryUtil};
pub use store::DocumentStore;
