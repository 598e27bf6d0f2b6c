pub mod cast_member;
pub mod cast_member_type;
pub mod nested_cast_member;
pub mod repository;

pub use cast_member::{
    CastMember, CastMemberFilter, CastMemberId, CastMemberProps, CastMemberSearchFilter,
};
pub use cast_member_type::CastMemberType;
pub use nested_cast_member::NestedCastMember;
pub use repository::CastMemberRepository;
