//! Error types for rpn-sheets-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rpn-sheets-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row index past the last row of the grid
    #[error("Row index {row} out of bounds (rows: {rows})")]
    RowOutOfBounds { row: usize, rows: usize },

    /// Column index past the end of a (possibly short) row
    #[error("Column index {col} out of bounds in row {row} (columns: {cols})")]
    ColumnOutOfBounds { row: usize, col: usize, cols: usize },
}
