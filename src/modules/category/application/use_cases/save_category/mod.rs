mod command;
mod handler;
mod result;

pub use command::SaveCategoryCommand;
pub use handler::SaveCategoryHandler;
pub use result::SaveCategoryResult;
