//! Error types for the data-loader crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - `#[from]` conversions so `?` works on foreign errors

use thiserror::Error;

/// Errors that can occur while reading the movie table.
///
/// These are all *file-level* failures. Individual cells that fail numeric
/// parsing are not errors: they become `None` on the [`Movie`](crate::Movie).
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The table itself is malformed (bad quoting, invalid UTF-8, ...)
    #[error("Malformed table: {0}")]
    Csv(#[from] csv::Error),

    /// The header row has no column for a required attribute
    #[error("Missing required column: {column}")]
    MissingColumn { column: &'static str },

    /// A data row has more fields than the header declares
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: u64,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
