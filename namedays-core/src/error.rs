//! Error types for the namedays core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in nameday calendar operations.
#[derive(Error, Debug)]
pub enum NamedayError {
    #[error("Day {day} and month {month} do not form a valid date")]
    OutOfRange { day: i32, month: i32 },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Invalid date '{input}': {reason}. Expected D.M (e.g. 24.12)")]
    DateFormat { input: String, reason: String },

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for nameday operations.
pub type NamedayResult<T> = Result<T, NamedayError>;
