//! # rpn-sheets
//!
//! Resolve single-operation Reverse-Polish-Notation formulas in CSV grids.
//!
//! Each cell is either a literal or a formula starting with `=`. A formula is
//! one operand (`=B2`, `=10`) or two operands and an operator in postfix
//! order (`=A1 3 +`). Operands that start with an uppercase letter are cell
//! addresses (`A`-`Z` then a 1-based row).
//!
//! Formulas are evaluated in one sweep, row by row and left to right, and each
//! result replaces its formula immediately. A formula can use results from
//! cells above and to its left; cells below or to its right are still raw
//! text when it runs.
//!
//! ## Example
//!
//! ```rust
//! use rpn_sheets::prelude::*;
//!
//! let mut grid = CsvReader::read_str(
//!     "1,2\n=A1 B1 +,=A2 0 /\n",
//!     &CsvReadOptions::default(),
//! ).unwrap();
//!
//! grid.calculate().unwrap();
//!
//! assert_eq!(grid.render(), "1,2\n3,Error: Divide by Zero");
//! ```

pub mod calculation;
pub mod error;
pub mod prelude;

// Re-export calculation types
pub use calculation::GridCalculationExt;
pub use error::{Error, Result};

// Re-export core types
pub use rpn_sheets_core::{
    format_number, CellAddress, CellError, CellValue, Grid, MAX_COLS, MAX_SAFE_INTEGER,
    MIN_SAFE_INTEGER,
};

// Re-export formula types
pub use rpn_sheets_formula::{
    apply, evaluate_cell, evaluate_grid, parse_formula, resolve, Formula, FormulaError,
    FormulaResult, Operator, SweepStats,
};

// Re-export I/O types
pub use rpn_sheets_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};

use std::path::Path;

/// Extension trait for Grid to add file I/O
pub trait GridExt: Sized {
    /// Open a grid from a CSV file with default options
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the grid to a CSV file with default options
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;

    /// Render the grid as comma-joined rows separated by newlines
    fn render(&self) -> String;
}

impl GridExt for Grid {
    fn open<P: AsRef<Path>>(path: P) -> Result<Grid> {
        Ok(CsvReader::read_file(path, &CsvReadOptions::default())?)
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        Ok(CsvWriter::write_file(self, path, &CsvWriteOptions::default())?)
    }

    fn render(&self) -> String {
        CsvWriter::to_string(self, &CsvWriteOptions::default())
    }
}

/// Read a CSV file, resolve every formula, and return the rendered grid
pub fn resolve_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let mut grid = Grid::open(path)?;
    grid.calculate()?;
    Ok(grid.render())
}
