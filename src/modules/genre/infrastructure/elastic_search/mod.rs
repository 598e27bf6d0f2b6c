pub mod mapper;
pub mod repository;

pub use mapper::{GenreDocument, GenreDocumentMapper, NestedGenreDocument};
pub use repository::GenreElasticSearchRepository;
