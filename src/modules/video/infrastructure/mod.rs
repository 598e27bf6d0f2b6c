pub mod elastic_search;
pub mod in_memory;

pub use elastic_search::VideoElasticSearchRepository;
pub use in_memory::VideoInMemoryRepository;
