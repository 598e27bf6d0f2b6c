use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// A single validation failure: either a bare message or messages grouped by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    Message(String),
    Field { field: String, messages: Vec<String> },
}

impl ErrorEntry {
    pub fn message(message: impl Into<String>) -> Self {
        ErrorEntry::Message(message.into())
    }

    pub fn field(field: impl Into<String>, messages: Vec<String>) -> Self {
        ErrorEntry::Field {
            field: field.into(),
            messages,
        }
    }
}

// Serialized as `"message"` or `{ "field": ["message", ...] }`
impl Serialize for ErrorEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ErrorEntry::Message(message) => serializer.serialize_str(message),
            ErrorEntry::Field { field, messages } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(field, messages)?;
                map.end()
            }
        }
    }
}

/// Validation errors collected by an aggregate instead of failing fast.
///
/// Entries keep insertion order and a message is never recorded twice for
/// the same field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    entries: Vec<ErrorEntry>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        let message = message.into();
        for entry in &mut self.entries {
            if let ErrorEntry::Field {
                field: existing,
                messages,
            } = entry
            {
                if existing == field {
                    if !messages.contains(&message) {
                        messages.push(message);
                    }
                    return;
                }
            }
        }
        self.entries.push(ErrorEntry::field(field, vec![message]));
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        let entry = ErrorEntry::Message(message.into());
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    /// Replace every message recorded for `field`
    pub fn set_error(&mut self, field: &str, messages: Vec<String>) {
        let position = self.entries.iter().position(
            |entry| matches!(entry, ErrorEntry::Field { field: existing, .. } if existing == field),
        );
        let entry = ErrorEntry::field(field, messages);
        match position {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    pub fn messages_for(&self, field: &str) -> Option<&[String]> {
        self.entries.iter().find_map(|entry| match entry {
            ErrorEntry::Field {
                field: existing,
                messages,
            } if existing == field => Some(messages.as_slice()),
            _ => None,
        })
    }

    pub fn copy_errors(&mut self, other: &Notification) {
        for entry in &other.entries {
            match entry {
                ErrorEntry::Message(message) => self.add_message(message.clone()),
                ErrorEntry::Field { field, messages } => {
                    for message in messages {
                        self.add_error(field, message.clone());
                    }
                }
            }
        }
    }

    pub fn errors(&self) -> &[ErrorEntry] {
        &self.entries
    }

    pub fn into_errors(self) -> Vec<ErrorEntry> {
        self.entries
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.entries).unwrap_or(serde_json::Value::Null)
    }
}
