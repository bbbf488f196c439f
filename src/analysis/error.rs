//! Error types for dataset I/O and configuration

use thiserror::Error;

/// Errors raised outside the pure sequence transforms.
///
/// The transforms and composition statistics never fail; everything here
/// comes from reading or writing tables, configs and generated data.
#[derive(Debug, Error)]
pub enum DnaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested sequence column is not in the header row
    #[error("column '{column}' not found (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("row {index} out of range (table has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    /// Position is 1-based
    #[error("invalid character '{character}' at position {position}. Only A, C, G, T are allowed.")]
    InvalidSequence { character: char, position: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DnaError>;

/// Attach the offending path to an I/O error.
pub(crate) fn io_with_path(e: std::io::Error, path: &std::path::Path) -> DnaError {
    DnaError::Io(std::io::Error::new(
        e.kind(),
        format!("{}: {}", path.display(), e),
    ))
}
