/// Shared infrastructure concerns
///
/// Repository implementations reused by every bounded context: an in-memory
/// store for tests and local runs, and the search engine backed store.
pub mod elastic_search;
pub mod in_memory;

pub use elastic_search::{DocumentStore, ElasticSearchRepository, ElasticsearchClient};
pub use in_memory::InMemoryRepository;
