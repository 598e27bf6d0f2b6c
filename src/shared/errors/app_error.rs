use serde::Serialize;
use std::fmt::Display;
use thiserror::Error;

use crate::shared::domain::notification::{ErrorEntry, Notification};

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Entity Validation Error")]
    EntityValidation(Vec<ErrorEntry>),

    #[error("Load Entity Error")]
    LoadEntity(Vec<ErrorEntry>),

    #[error("Search Validation Error")]
    SearchValidation(Vec<ErrorEntry>),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    InvalidUuid(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl AppError {
    /// `"<Entity> Not Found using ID <id>[, <id>...]"`
    pub fn not_found<I: Display>(entity_name: &str, ids: &[I]) -> Self {
        let ids = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        AppError::NotFound(format!("{} Not Found using ID {}", entity_name, ids))
    }

    /// `EntityValidation` carrying every error collected by `notification`
    pub fn entity_validation(notification: &Notification) -> Self {
        AppError::EntityValidation(notification.errors().to_vec())
    }

    /// Field errors carried by the validation flavoured variants
    pub fn error_entries(&self) -> Option<&[ErrorEntry]> {
        match self {
            AppError::EntityValidation(entries)
            | AppError::LoadEntity(entries)
            | AppError::SearchValidation(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Field error listing one `Not Found` message per missing id
pub fn not_found_entry<I: Display>(field: &str, entity_name: &str, ids: &[I]) -> ErrorEntry {
    let messages = ids
        .iter()
        .map(|id| AppError::not_found(entity_name, &[id]).to_string())
        .collect();
    ErrorEntry::field(field, messages)
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::ExternalServiceError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::ExternalServiceError("Failed to connect to search engine".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => AppError::RateLimitError("Too many requests".to_string()),
                404 => AppError::NotFound("Search engine resource not found".to_string()),
                401 | 403 => {
                    AppError::Unauthorized("Not authorized to access search engine".to_string())
                }
                _ => AppError::ApiError(format!("HTTP {}: {}", status, err)),
            }
        } else {
            AppError::ApiError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(_: uuid::Error) -> Self {
        AppError::InvalidUuid("ID must be a valid UUID".to_string())
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::InvalidInput(format!("Invalid date/time: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
