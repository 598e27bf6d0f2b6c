pub mod mapper;
pub mod repository;

pub use mapper::{CategoryDocument, CategoryDocumentMapper, NestedCategoryDocument};
pub use repository::CategoryElasticSearchRepository;
