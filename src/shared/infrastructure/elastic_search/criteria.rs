use super::query::{exists, BoolQuery};
use crate::shared::domain::repository::Criteria;

/// Excludes documents carrying a `deleted_at` value
#[derive(Debug, Default, Clone, Copy)]
pub struct SoftDeleteElasticSearchCriteria;

impl Criteria<BoolQuery> for SoftDeleteElasticSearchCriteria {
    fn apply(&self, query: BoolQuery) -> BoolQuery {
        query.must_not(exists("deleted_at"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infrastructure::elastic_search::query::term;
    use serde_json::json;

    #[test]
    fn adds_must_not_exists_clause() {
        let query = SoftDeleteElasticSearchCriteria
            .apply(BoolQuery::new().must(term("type", "Genre")))
            .into_query();

        assert_eq!(
            query,
            json!({
                "bool": {
                    "must": [{ "term": { "type": "Genre" } }],
                    "must_not": [{ "exists": { "field": "deleted_at" } }]
                }
            })
        );
    }
}
