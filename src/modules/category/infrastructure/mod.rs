pub mod elastic_search;
pub mod in_memory;

pub use elastic_search::CategoryElasticSearchRepository;
pub use in_memory::CategoryInMemoryRepository;
