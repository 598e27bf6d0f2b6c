mod handler;
mod query;
mod result;

pub use handler::ListCastMembersHandler;
pub use query::{CastMemberSearchInput, ListCastMembersQuery};
pub use result::ListCastMembersResult;
