/// Every non-deleted cast member, ordered by name
#[derive(Debug, Clone, Copy, Default)]
pub struct ListAllCastMembersQuery;
