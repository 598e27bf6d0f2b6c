use std::sync::Arc;

use super::mapper::VideoDocumentMapper;
use crate::modules::video::domain::VideoRepository;
use crate::shared::infrastructure::elastic_search::ElasticSearchRepository;

pub type VideoElasticSearchRepository = ElasticSearchRepository<VideoDocumentMapper>;

impl VideoRepository for ElasticSearchRepository<VideoDocumentMapper> {
    fn ignore_soft_deleted(&self) -> Arc<dyn VideoRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn VideoRepository> {
        Arc::new(self.without_scopes())
    }
}
