use super::validation_chain::{ValidationResult, ValidationRule};

/// Upper bound on the character count of a text field
pub struct MaxLength<T> {
    field: &'static str,
    max: usize,
    value: fn(&T) -> &str,
}

impl<T> MaxLength<T> {
    pub fn new(field: &'static str, max: usize, value: fn(&T) -> &str) -> Self {
        Self { field, max, value }
    }
}

impl<T> ValidationRule<T> for MaxLength<T> {
    fn validate(&self, target: &T) -> ValidationResult {
        if (self.value)(target).chars().count() > self.max {
            return ValidationResult::invalid(format!(
                "{} must be shorter than or equal to {} characters",
                self.field, self.max
            ));
        }
        ValidationResult::valid()
    }

    fn field(&self) -> &'static str {
        self.field
    }

    fn rule_name(&self) -> &'static str {
        "MaxLength"
    }
}

/// Requires a collection to hold at least one element
pub struct NotEmpty<T> {
    field: &'static str,
    len: fn(&T) -> usize,
}

impl<T> NotEmpty<T> {
    pub fn new(field: &'static str, len: fn(&T) -> usize) -> Self {
        Self { field, len }
    }
}

impl<T> ValidationRule<T> for NotEmpty<T> {
    fn validate(&self, target: &T) -> ValidationResult {
        if (self.len)(target) == 0 {
            return ValidationResult::invalid(format!("{} should not be empty", self.field));
        }
        ValidationResult::valid()
    }

    fn field(&self) -> &'static str {
        self.field
    }

    fn rule_name(&self) -> &'static str {
        "NotEmpty"
    }
}
