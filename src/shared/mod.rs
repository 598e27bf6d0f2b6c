// Shared Kernel - Domain Driven Design
// Following Clean Architecture + Hexagonal Architecture patterns

pub mod application; // Use case contracts and pagination
pub mod config; // Environment driven configuration
pub mod domain; // Aggregates, notification, repository contracts
pub mod errors; // Shared error types
pub mod infrastructure; // In-memory and search engine persistence
pub mod utils; // Logging helpers
pub mod validation; // Field validation rules

pub use errors::{AppError, AppResult};
