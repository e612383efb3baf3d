//! Grid calculation
//!
//! # Example
//!
//! ```rust
//! use rpn_sheets::prelude::*;
//!
//! let mut grid = Grid::from_rows(vec![vec!["1", "=A1 2 +"]]);
//! let stats = grid.calculate().unwrap();
//!
//! assert_eq!(stats.cells_evaluated, 1);
//! assert_eq!(grid.render(), "1,3");
//! ```

use crate::{evaluate_grid, Grid, Result, SweepStats};

/// Extension trait for Grid to add calculation
pub trait GridCalculationExt {
    /// Replace every formula with its result in a single row-major sweep
    fn calculate(&mut self) -> Result<SweepStats>;
}

impl GridCalculationExt for Grid {
    fn calculate(&mut self) -> Result<SweepStats> {
        Ok(evaluate_grid(self)?)
    }
}
