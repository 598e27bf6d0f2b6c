mod command;
mod handler;

pub use command::DeleteCastMemberCommand;
pub use handler::DeleteCastMemberHandler;
