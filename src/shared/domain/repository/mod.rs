pub mod criteria;
pub mod contract;
pub mod search;

pub use criteria::{Criteria, Scopes, SOFT_DELETE_SCOPE};
pub use contract::{
    ensure_ids_not_empty, ExistsResult, FoundEntities, Repository, SearchableRepository,
    SortDirection, SortOrder,
};
pub use search::{SearchParams, SearchResult, DEFAULT_PER_PAGE};
