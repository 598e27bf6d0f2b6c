mod command;
mod handler;
mod result;

pub use command::SaveCastMemberCommand;
pub use handler::SaveCastMemberHandler;
pub use result::SaveCastMemberResult;
