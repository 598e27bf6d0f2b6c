pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CastMemberOutput;
pub use domain::{CastMember, CastMemberId, CastMemberRepository, CastMemberType, NestedCastMember};
pub use infrastructure::{CastMemberElasticSearchRepository, CastMemberInMemoryRepository};
