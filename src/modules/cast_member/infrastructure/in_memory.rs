use std::sync::Arc;

use crate::modules::cast_member::domain::{CastMember, CastMemberRepository};
use crate::shared::infrastructure::in_memory::InMemoryRepository;

pub type CastMemberInMemoryRepository = InMemoryRepository<CastMember>;

impl CastMemberRepository for InMemoryRepository<CastMember> {
    fn ignore_soft_deleted(&self) -> Arc<dyn CastMemberRepository> {
        Arc::new(self.ignoring_soft_deleted())
    }

    fn clear_scopes(&self) -> Arc<dyn CastMemberRepository> {
        Arc::new(self.without_scopes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cast_member::domain::{
        CastMemberFilter, CastMemberProps, CastMemberSearchFilter, CastMemberType,
    };
    use crate::shared::domain::repository::{Repository, SearchParams, SearchableRepository};

    #[tokio::test]
    async fn filters_by_type() {
        let repository = CastMemberInMemoryRepository::with_items(vec![
            CastMember::create(CastMemberProps::new("Kubrick", CastMemberType::Director)),
            CastMember::create(CastMemberProps::new("Duvall", CastMemberType::Actor)),
        ]);

        let directors = repository
            .find_by(
                &CastMemberFilter {
                    cast_member_type: Some(CastMemberType::Director),
                    ..CastMemberFilter::default()
                },
                None,
            )
            .await
            .unwrap();
        let params = SearchParams::new(
            None,
            None,
            None,
            None,
            Some(CastMemberSearchFilter {
                name: Some("DUV".to_string()),
                cast_member_type: Some(CastMemberType::Actor),
            }),
        );
        let actors = repository.search(&params).await.unwrap();

        assert_eq!(directors.len(), 1);
        assert_eq!(directors[0].name(), "Kubrick");
        assert_eq!(actors.total, 1);
        assert_eq!(actors.items[0].name(), "Duvall");
    }
}
