mod command;
mod handler;
mod result;

pub use command::SaveVideoCommand;
pub use handler::SaveVideoHandler;
pub use result::SaveVideoResult;
