use std::sync::Arc;

use super::video::Video;
use crate::shared::domain::repository::SearchableRepository;

pub trait VideoRepository: SearchableRepository<Video> {
    fn ignore_soft_deleted(&self) -> Arc<dyn VideoRepository>;

    fn clear_scopes(&self) -> Arc<dyn VideoRepository>;
}
