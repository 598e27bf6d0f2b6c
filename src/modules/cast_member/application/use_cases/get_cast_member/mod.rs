mod handler;
mod query;

pub use handler::GetCastMemberHandler;
pub use query::GetCastMemberQuery;
