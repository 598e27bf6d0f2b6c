pub mod delete_cast_member;
pub mod get_cast_member;
pub mod list_all_cast_members;
pub mod list_cast_members;
pub mod save_cast_member;

pub use delete_cast_member::{DeleteCastMemberCommand, DeleteCastMemberHandler};
pub use get_cast_member::{GetCastMemberHandler, GetCastMemberQuery};
pub use list_all_cast_members::{ListAllCastMembersHandler, ListAllCastMembersQuery};
pub use list_cast_members::{
    CastMemberSearchInput, ListCastMembersHandler, ListCastMembersQuery, ListCastMembersResult,
};
pub use save_cast_member::{SaveCastMemberCommand, SaveCastMemberHandler, SaveCastMemberResult};
