mod handler;
mod query;

pub use handler::ListAllCastMembersHandler;
pub use query::ListAllCastMembersQuery;
