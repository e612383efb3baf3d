//! Error types for the rpn-sheets facade

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from any stage of the ingest, evaluate, emit pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing CSV failed
    #[error(transparent)]
    Csv(#[from] rpn_sheets_csv::CsvError),

    /// A formula referenced a cell that does not exist
    #[error(transparent)]
    Formula(#[from] rpn_sheets_formula::FormulaError),
}
