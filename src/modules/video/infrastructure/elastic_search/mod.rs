pub mod mapper;
pub mod repository;

pub use mapper::{VideoDocument, VideoDocumentMapper};
pub use repository::VideoElasticSearchRepository;
