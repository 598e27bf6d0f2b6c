use serde::Serialize;

use super::contract::{SortDirection, SortOrder};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Normalised pagination, sorting and filtering for `search`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams<F> {
    page: u64,
    per_page: u64,
    sort: Option<String>,
    sort_dir: Option<SortDirection>,
    filter: Option<F>,
}

impl<F> Default for SearchParams<F> {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            sort: None,
            sort_dir: None,
            filter: None,
        }
    }
}

impl<F> SearchParams<F> {
    /// Build from raw values, replacing anything invalid with its default.
    pub fn new(
        page: Option<i64>,
        per_page: Option<i64>,
        sort: Option<String>,
        sort_dir: Option<String>,
        filter: Option<F>,
    ) -> Self {
        let page = match page {
            Some(value) if value > 0 => value as u64,
            _ => DEFAULT_PAGE,
        };
        let per_page = match per_page {
            Some(value) if value > 0 => value as u64,
            _ => DEFAULT_PER_PAGE,
        };
        let sort = sort
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        // a direction without a field is meaningless
        let sort_dir = sort.as_ref().map(|_| {
            sort_dir
                .as_deref()
                .map(SortDirection::parse_lenient)
                .unwrap_or(SortDirection::Asc)
        });

        Self {
            page,
            per_page,
            sort,
            sort_dir,
            filter,
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }

    pub fn sort_dir(&self) -> Option<SortDirection> {
        self.sort_dir
    }

    pub fn filter(&self) -> Option<&F> {
        self.filter.as_ref()
    }

    /// Saturates for out-of-range pages, which then simply come back empty
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort.as_ref().map(|field| {
            SortOrder::new(field.clone(), self.sort_dir.unwrap_or(SortDirection::Asc))
        })
    }

    pub fn with_filter<G>(self, filter: Option<G>) -> SearchParams<G> {
        SearchParams {
            page: self.page,
            per_page: self.per_page,
            sort: self.sort,
            sort_dir: self.sort_dir,
            filter,
        }
    }
}

/// One page of search hits
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult<E> {
    pub items: Vec<E>,
    pub total: u64,
    pub current_page: u64,
    pub per_page: u64,
    pub last_page: u64,
}

impl<E> SearchResult<E> {
    pub fn new(items: Vec<E>, total: u64, current_page: u64, per_page: u64) -> Self {
        let last_page = if per_page == 0 {
            0
        } else {
            ((total as f64) / (per_page as f64)).ceil() as u64
        };

        Self {
            items,
            total,
            current_page,
            per_page,
            last_page,
        }
    }

    pub fn map<U, M: FnMut(E) -> U>(self, mapper: M) -> SearchResult<U> {
        SearchResult {
            items: self.items.into_iter().map(mapper).collect(),
            total: self.total,
            current_page: self.current_page,
            per_page: self.per_page,
            last_page: self.last_page,
        }
    }
}
