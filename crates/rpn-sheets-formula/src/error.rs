//! Formula error types

use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that abort formula evaluation
///
/// Arithmetic failures are not errors at this level; they are stored in the
/// cell as a [`CellError`](rpn_sheets_core::CellError).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaError {
    /// Reference to a malformed address or a cell outside the grid
    #[error("Invalid reference '{address}': {source}")]
    Reference {
        address: String,
        #[source]
        source: rpn_sheets_core::Error,
    },

    /// Grid access failure while writing a result
    #[error("Grid error: {0}")]
    Grid(#[from] rpn_sheets_core::Error),
}
