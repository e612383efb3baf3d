//! Cell evaluation and the grid sweep
//!
//! The sweep visits every cell exactly once, row-major, left to right, and
//! writes each formula's result back before moving on. Later formulas see
//! earlier results; earlier formulas see later cells' raw text. There is no
//! dependency ordering.

use crate::arithmetic::apply;
use crate::error::FormulaResult;
use crate::parser::{parse_formula, Formula, Operator};
use crate::resolver::resolve;
use rpn_sheets_core::{CellAddress, CellValue, Grid};

/// Statistics from a sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SweepStats {
    /// Number of formula cells encountered
    pub formula_count: usize,
    /// Number of formula cells replaced with a result
    pub cells_evaluated: usize,
    /// Number of formula cells left unchanged (unsupported shape)
    pub cells_skipped: usize,
    /// Number of results that are arithmetic errors
    pub errors: usize,
}

/// Evaluate one cell's content against the grid.
///
/// Returns `Ok(None)` when the cell must be left as-is: literals and formulas
/// with a token count other than 1 or 3. Any operator other than `+ - *`
/// divides. A reference that cannot be resolved is returned as an error.
pub fn evaluate_cell(grid: &Grid, raw: &CellValue) -> FormulaResult<Option<CellValue>> {
    let Some(text) = raw.formula_text() else {
        return Ok(None);
    };
    let Some(formula) = parse_formula(text) else {
        return Ok(None);
    };

    match formula {
        Formula::Unary(operand) => resolve(grid, operand).map(Some),
        Formula::Binary { lhs, rhs, operator } => {
            let a = resolve(grid, lhs)?;
            let b = resolve(grid, rhs)?;
            let symbol = resolve(grid, operator)?;

            let operator = symbol
                .as_text()
                .and_then(Operator::parse)
                .unwrap_or_else(|| {
                    log::debug!("Operator {:?} in {:?} treated as division", symbol, text);
                    Operator::Divide
                });
            Ok(Some(apply(&a, &b, operator)))
        }
        Formula::Unsupported { tokens } => {
            log::debug!("Unsupported formula shape ({} tokens): {:?}", tokens, text);
            Ok(None)
        }
    }
}

/// Evaluate every formula in the grid in place.
///
/// Stops at the first reference error; cells visited before it keep their
/// results.
pub fn evaluate_grid(grid: &mut Grid) -> FormulaResult<SweepStats> {
    let mut stats = SweepStats::default();

    for row in 0..grid.row_count() {
        let width = grid.row(row).map_or(0, <[CellValue]>::len);

        for col in 0..width {
            let Some(raw) = grid.get(row, col) else {
                continue;
            };
            if !raw.is_formula() {
                continue;
            }
            stats.formula_count += 1;

            match evaluate_cell(grid, raw)? {
                Some(value) => {
                    log::debug!("{}: {} -> {}", CellAddress::new(row, col), raw, value);
                    if value.is_error() {
                        stats.errors += 1;
                    }
                    grid.set(row, col, value)?;
                    stats.cells_evaluated += 1;
                }
                None => stats.cells_skipped += 1,
            }
        }
    }

    log::debug!(
        "Evaluated {} of {} formulas ({} errors)",
        stats.cells_evaluated,
        stats.formula_count,
        stats.errors
    );
    Ok(stats)
}
