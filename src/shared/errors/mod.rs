pub mod app_error;

pub use app_error::{not_found_entry, AppError, AppResult};
