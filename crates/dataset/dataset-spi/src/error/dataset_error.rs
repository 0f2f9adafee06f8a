//! Dataset error types.

use thiserror::Error;

/// Errors raised while loading the source table.
///
/// `Clone` is required so the cached load result can be handed out repeatedly
/// from the process-wide table store.
#[derive(Debug, Clone, Error)]
pub enum DatasetError {
    /// Source file could not be opened
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Failed to read or parse the CSV structure
    #[error("Failed to parse CSV: {0}")]
    CsvError(String),

    /// A required column header is absent
    #[error("Missing required column: '{0}'")]
    MissingColumn(String),

    /// A cell could not be coerced to the expected type
    #[error("Invalid value '{value}' in column '{column}'")]
    InvalidValue { column: String, value: String },

    /// The file parsed but contained no data rows
    #[error("No data rows in source file")]
    NoData,
}

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DatasetError>;
