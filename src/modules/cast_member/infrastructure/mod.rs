pub mod elastic_search;
pub mod in_memory;

pub use elastic_search::CastMemberElasticSearchRepository;
pub use in_memory::CastMemberInMemoryRepository;
