/// Pagination support for list queries
///
/// Standard input and output models used across all bounded contexts
use serde::{Deserialize, Serialize};

use crate::shared::domain::repository::{SearchParams, SearchResult};

/// Raw listing input as received from callers, normalised into [`SearchParams`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchInput<F> {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub sort: Option<String>,
    pub sort_dir: Option<String>,
    pub filter: Option<F>,
}

impl<F> SearchInput<F> {
    pub fn into_params<G>(self, filter: Option<G>) -> SearchParams<G> {
        SearchParams::new(self.page, self.per_page, self.sort, self.sort_dir, filter)
    }
}

/// Paginated result wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationOutput<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
}

impl<T> PaginationOutput<T> {
    pub fn from_search_result<E>(result: SearchResult<E>, mapper: impl FnMut(E) -> T) -> Self {
        let result = result.map(mapper);
        Self {
            items: result.items,
            total: result.total,
            current_page: result.current_page,
            last_page: result.last_page,
            per_page: result.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_items_and_keeps_page_metadata() {
        let result = SearchResult::new(vec![1, 2], 5, 2, 2);

        let output = PaginationOutput::from_search_result(result, |n| n * 10);

        assert_eq!(output.items, vec![10, 20]);
        assert_eq!(output.total, 5);
        assert_eq!(output.current_page, 2);
        assert_eq!(output.last_page, 3);
        assert_eq!(output.per_page, 2);
    }

    #[test]
    fn input_normalises_into_params() {
        let input: SearchInput<()> = SearchInput {
            page: Some(0),
            per_page: None,
            sort: Some("name".to_string()),
            sort_dir: None,
            filter: None,
        };

        let params = input.into_params(Some("action".to_string()));

        assert_eq!(params.page(), 1);
        assert_eq!(params.per_page(), 15);
        assert_eq!(params.sort(), Some("name"));
        assert_eq!(params.filter().map(String::as_str), Some("action"));
    }
}
