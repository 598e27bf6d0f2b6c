use crate::modules::cast_member::application::output::CastMemberOutput;
use crate::shared::application::pagination::PaginationOutput;

pub type ListCastMembersResult = PaginationOutput<CastMemberOutput>;
