//! Error types for table construction

use thiserror::Error;

/// Errors that can occur while assembling a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    #[error("Column '{column}' has {actual} rows, table has {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;
