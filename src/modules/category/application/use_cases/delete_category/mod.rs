mod command;
mod handler;

pub use command::DeleteCategoryCommand;
pub use handler::DeleteCategoryHandler;
