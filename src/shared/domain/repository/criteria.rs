use std::fmt::{self, Debug};
use std::sync::Arc;

/// Name under which the soft-delete criteria is registered
pub const SOFT_DELETE_SCOPE: &str = "soft_delete";

/// A composable predicate applied to a store-specific query before execution
pub trait Criteria<Q>: Debug + Send + Sync {
    fn apply(&self, query: Q) -> Q;
}

/// Named set of criteria applied in insertion order.
/// Registering a name twice replaces the earlier criteria.
pub struct Scopes<Q: 'static> {
    entries: Vec<(&'static str, Arc<dyn Criteria<Q>>)>,
}

impl<Q: 'static> Scopes<Q> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with(mut self, name: &'static str, criteria: Arc<dyn Criteria<Q>>) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = criteria,
            None => self.entries.push((name, criteria)),
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, _)| *existing == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn apply(&self, query: Q) -> Q {
        self.entries
            .iter()
            .fold(query, |query, (_, criteria)| criteria.apply(query))
    }
}

impl<Q: 'static> Default for Scopes<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: 'static> Clone for Scopes<Q> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<Q: 'static> Debug for Scopes<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Append(&'static str);

    impl Criteria<Vec<&'static str>> for Append {
        fn apply(&self, mut query: Vec<&'static str>) -> Vec<&'static str> {
            query.push(self.0);
            query
        }
    }

    #[test]
    fn applies_criteria_in_registration_order() {
        let scopes = Scopes::new()
            .with("first", Arc::new(Append("a")))
            .with("second", Arc::new(Append("b")));

        assert_eq!(scopes.apply(vec![]), vec!["a", "b"]);
        assert_eq!(scopes.names(), vec!["first", "second"]);
    }

    #[test]
    fn same_name_replaces_previous_criteria() {
        let scopes = Scopes::new()
            .with("only", Arc::new(Append("a")))
            .with("only", Arc::new(Append("b")));

        assert_eq!(scopes.apply(vec![]), vec!["b"]);
        assert!(scopes.contains("only"));
        assert!(!Scopes::<Vec<&'static str>>::new().contains("only"));
    }
}
