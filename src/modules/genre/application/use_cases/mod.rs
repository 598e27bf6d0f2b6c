pub mod delete_genre;
pub mod get_genre;
pub mod list_all_genres;
pub mod save_genre;

pub use delete_genre::{DeleteGenreCommand, DeleteGenreHandler};
pub use get_genre::{GetGenreHandler, GetGenreQuery};
pub use list_all_genres::{ListAllGenresHandler, ListAllGenresQuery};
pub use save_genre::{SaveGenreCommand, SaveGenreHandler, SaveGenreResult};
