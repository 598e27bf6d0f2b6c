pub mod output;
pub mod use_cases;

pub use output::CategoryOutput;
