use std::sync::Arc;

use crate::shared::domain::notification::Notification;

/// Result of a validation rule check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(error: String) -> Self {
        Self {
            is_valid: false,
            errors: vec![error],
        }
    }
}

/// A single check over `T` whose failures are reported under `field()`
pub trait ValidationRule<T>: Send + Sync {
    fn validate(&self, target: &T) -> ValidationResult;

    /// Field group the rule belongs to, also the key errors are recorded under
    fn field(&self) -> &'static str;

    /// Get the name of this validation rule for logging
    fn rule_name(&self) -> &'static str;
}

/// Ordered chain of rules. Failures land in a [`Notification`] rather than
/// aborting, so callers can report every problem at once.
pub struct ValidationChain<T: 'static> {
    rules: Vec<Arc<dyn ValidationRule<T>>>,
}

impl<T: 'static> ValidationChain<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a validation rule to the chain
    pub fn add_rule(mut self, rule: impl ValidationRule<T> + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Run the rules whose field is listed in `fields`; every rule when `fields` is empty.
    pub fn validate(&self, target: &T, fields: &[&str]) -> Notification {
        let mut notification = Notification::new();

        for rule in &self.rules {
            if !fields.is_empty() && !fields.contains(&rule.field()) {
                continue;
            }

            let result = rule.validate(target);
            if result.is_valid {
                continue;
            }

            log::debug!(
                "Validation rule '{}' failed on field '{}'",
                rule.rule_name(),
                rule.field()
            );
            for error in result.errors {
                notification.add_error(rule.field(), error);
            }
        }

        notification
    }
}

impl<T: 'static> Default for ValidationChain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Clone for ValidationChain<T> {
    fn clone(&self) -> Self {
        Self {
            rules: self.rules.clone(),
        }
    }
}
