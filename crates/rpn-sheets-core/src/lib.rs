//! # rpn-sheets-core
//!
//! Core data structures for the rpn-sheets formula grid.
//!
//! This crate provides the fundamental types used throughout rpn-sheets:
//! - [`CellValue`] - Represents cell contents (raw text, computed numbers, arithmetic errors)
//! - [`CellAddress`] - Single-letter A1-style cell addressing
//! - [`Grid`] - The ragged, row-major table the evaluator sweeps over
//!
//! ## Example
//!
//! ```rust
//! use rpn_sheets_core::{CellAddress, CellValue, Grid};
//!
//! let mut grid = Grid::from_rows(vec![
//!     vec!["1", "2"],
//!     vec!["=A1 B1 +"],
//! ]);
//!
//! let addr = CellAddress::parse("B1").unwrap();
//! assert_eq!(grid.get_at(&addr), Some(&CellValue::text("2")));
//!
//! grid.set(1, 0, CellValue::Number(3.0)).unwrap();
//! assert_eq!(grid.get(1, 0).unwrap().to_string(), "3");
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod number;

// Re-exports for convenience
pub use cell::{CellAddress, CellError, CellValue};
pub use error::{Error, Result};
pub use grid::Grid;
pub use number::format_number;

/// Number of addressable columns (`A` through `Z`)
pub const MAX_COLS: usize = 26;

/// Largest integer exactly representable in an `f64` (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Negative counterpart of [`MAX_SAFE_INTEGER`]
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;
