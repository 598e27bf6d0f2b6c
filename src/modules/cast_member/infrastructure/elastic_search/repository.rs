use std::sync::Arc;

use super::mapper::CastMemberDocumentMapper;
use crate::modules::cast_member::domain::CastMemberRepository;
use crate::shared::infrastructure::elastic_search::ElasticSearchRepository;

pub type CastMemberElasticSearchRepository = ElasticSearchRepository<CastMemberDocumentMapper>;

impl CastMemberRepository for ElasticSearchRepository<CastMemberDocumentMapper> {
    fn ignore_soft_deleted(&self) -> Arc<dyn CastMemberRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn CastMemberRepository> {
        Arc::new(self.without_scopes())
    }
}
