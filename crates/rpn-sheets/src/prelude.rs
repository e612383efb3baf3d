//! Prelude module - common imports for rpn-sheets users
//!
//! ```rust
//! use rpn_sheets::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellError,
    CellValue,
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Error types
    Error,
    // Main types
    Grid,
    // Extension traits
    GridCalculationExt,
    GridExt,
    Result,
    SweepStats,
};
