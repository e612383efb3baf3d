//! # rpn-sheets-formula
//!
//! Formula evaluation for rpn-sheets grids.
//!
//! This crate provides:
//! - Formula shape detection (literal, unary reference, two-operand RPN)
//! - Address resolution against an explicit [`Grid`](rpn_sheets_core::Grid)
//! - The four-operator arithmetic engine with safe-integer bound checks
//! - The in-place, row-major evaluation sweep
//!
//! ## Example
//!
//! ```rust
//! use rpn_sheets_core::Grid;
//! use rpn_sheets_formula::evaluate_grid;
//!
//! let mut grid = Grid::from_rows(vec![vec!["=1 2 -", "=2 1 -", "=B1 2 +"]]);
//! evaluate_grid(&mut grid).unwrap();
//!
//! let row: Vec<String> = grid.row(0).unwrap().iter().map(|c| c.to_string()).collect();
//! assert_eq!(row, ["-1", "1", "3"]);
//! ```

pub mod arithmetic;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod resolver;

pub use arithmetic::{apply, calculate, parse_number, to_number};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate_cell, evaluate_grid, SweepStats};
pub use parser::{parse_formula, Formula, Operator};
pub use resolver::resolve;
