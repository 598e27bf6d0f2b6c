pub mod mapper;
pub mod repository;

pub use mapper::{CastMemberDocument, CastMemberDocumentMapper, NestedCastMemberDocument};
pub use repository::CastMemberElasticSearchRepository;
