mod command;
mod handler;

pub use command::DeleteVideoCommand;
pub use handler::DeleteVideoHandler;
