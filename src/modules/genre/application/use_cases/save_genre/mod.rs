mod command;
mod handler;
mod result;

pub use command::SaveGenreCommand;
pub use handler::SaveGenreHandler;
pub use result::SaveGenreResult;
