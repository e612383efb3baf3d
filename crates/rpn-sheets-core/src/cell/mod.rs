//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellError`] - Arithmetic failures stored in place of a result
//! - [`CellAddress`] - A cell's location (e.g., "B2")

mod address;
mod value;

pub use address::CellAddress;
pub use value::{CellError, CellValue};
