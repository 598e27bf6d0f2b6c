pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::GenreOutput;
pub use domain::{Genre, GenreId, GenreRepository, NestedGenre};
pub use infrastructure::{GenreElasticSearchRepository, GenreInMemoryRepository};
