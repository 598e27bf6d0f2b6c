pub mod elastic_search;
pub mod in_memory;

pub use elastic_search::GenreElasticSearchRepository;
pub use in_memory::GenreInMemoryRepository;
