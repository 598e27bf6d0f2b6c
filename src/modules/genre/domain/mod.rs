pub mod genre;
pub mod nested_genre;
pub mod repository;

pub use genre::{Genre, GenreFilter, GenreId, GenreProps};
pub use nested_genre::NestedGenre;
pub use repository::GenreRepository;
