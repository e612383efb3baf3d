//! Address resolution
//!
//! Turns a formula token into a value: tokens that start with an uppercase
//! letter are looked up in the grid, everything else passes through as text.
//! The lookup returns whatever the cell holds *now*, so during a sweep cells
//! above and to the left already carry their results while cells below and
//! to the right still carry their raw text.

use crate::error::{FormulaError, FormulaResult};
use rpn_sheets_core::{CellAddress, CellValue, Grid};

/// Resolve a single token against the grid.
///
/// # Examples
/// ```
/// use rpn_sheets_core::{CellValue, Grid};
/// use rpn_sheets_formula::resolve;
///
/// let grid = Grid::from_rows(vec![vec!["1", "2", "3.0"], vec!["4", "5", "6"]]);
/// assert_eq!(resolve(&grid, "C2").unwrap(), CellValue::text("6"));
/// assert_eq!(resolve(&grid, "1234").unwrap(), CellValue::text("1234"));
/// ```
pub fn resolve(grid: &Grid, token: &str) -> FormulaResult<CellValue> {
    if !CellAddress::is_address(token) {
        return Ok(CellValue::text(token));
    }

    let reference = |source| FormulaError::Reference {
        address: token.to_string(),
        source,
    };
    let addr = CellAddress::parse(token).map_err(reference)?;
    grid.try_get(addr.row, addr.col)
        .cloned()
        .map_err(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpn_sheets_core::Error;

    fn sample() -> Grid {
        Grid::from_rows(vec![
            vec!["1", "2", "3.0", "0.3"],
            vec!["4", "5", "6", "=10"],
            vec!["7", "8", "9", "10", "=B2"],
        ])
    }

    #[test]
    fn test_cell_lookup() {
        let grid = sample();
        assert_eq!(resolve(&grid, "A1").unwrap(), CellValue::text("1"));
        assert_eq!(resolve(&grid, "C2").unwrap(), CellValue::text("6"));
        assert_eq!(resolve(&grid, "E3").unwrap(), CellValue::text("=B2"));
    }

    #[test]
    fn test_literal_passthrough() {
        let grid = sample();
        assert_eq!(resolve(&grid, "1").unwrap(), CellValue::text("1"));
        assert_eq!(resolve(&grid, "1234").unwrap(), CellValue::text("1234"));
        assert_eq!(resolve(&grid, "+").unwrap(), CellValue::text("+"));
        assert_eq!(resolve(&grid, "").unwrap(), CellValue::text(""));
        assert_eq!(resolve(&grid, "b1").unwrap(), CellValue::text("b1"));
    }

    #[test]
    fn test_lookup_returns_current_value() {
        let mut grid = sample();
        grid.set(1, 3, 10.0).unwrap();
        assert_eq!(resolve(&grid, "D2").unwrap(), CellValue::Number(10.0));
    }

    #[test]
    fn test_out_of_bounds_is_reference_error() {
        let grid = sample();

        let err = resolve(&grid, "A9").unwrap_err();
        assert_eq!(
            err,
            FormulaError::Reference {
                address: "A9".into(),
                source: Error::RowOutOfBounds { row: 8, rows: 3 },
            }
        );

        // Short row: D exists in row 1 but E does not
        assert!(resolve(&grid, "E1").is_err());
    }

    #[test]
    fn test_malformed_address_is_reference_error() {
        let grid = sample();
        assert!(matches!(
            resolve(&grid, "AA1"),
            Err(FormulaError::Reference {
                source: Error::InvalidAddress(_),
                ..
            })
        ));
        assert!(resolve(&grid, "A0").is_err());
        assert!(resolve(&grid, "Z").is_err());
    }
}
