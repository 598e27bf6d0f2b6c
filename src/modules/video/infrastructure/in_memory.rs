use std::sync::Arc;

use crate::modules::video::domain::{Video, VideoRepository};
use crate::shared::infrastructure::in_memory::InMemoryRepository;

pub type VideoInMemoryRepository = InMemoryRepository<Video>;

impl VideoRepository for InMemoryRepository<Video> {
    fn ignore_soft_deleted(&self) -> Arc<dyn VideoRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn VideoRepository> {
        Arc::new(self.without_scopes())
    }
}
