pub mod criteria;
pub mod repository;

pub use criteria::SoftDeleteInMemoryCriteria;
pub use repository::InMemoryRepository;
