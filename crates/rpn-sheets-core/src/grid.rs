//! Grid type

use crate::cell::{CellAddress, CellValue};
use crate::error::{Error, Result};

/// A ragged, row-major table of cells
///
/// Rows keep the length they were ingested with; there is no padding to a
/// common width. Lookups past the end of a row or of the grid return `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from nested rows of anything convertible to a cell
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Append a row at the bottom of the grid
    pub fn push_row<C: Into<CellValue>>(&mut self, row: impl IntoIterator<Item = C>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total number of cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Number of cells still holding formula text
    pub fn formula_count(&self) -> usize {
        self.cells().filter(|(_, _, v)| v.is_formula()).count()
    }

    /// Get a row by index
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterate over rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterate over `(row, col, value)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &CellValue)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().map(move |(c, value)| (r, c, value))
        })
    }

    /// Get a cell value by indices
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a cell value by address
    pub fn get_at(&self, addr: &CellAddress) -> Option<&CellValue> {
        self.get(addr.row, addr.col)
    }

    /// Get a cell value by indices, reporting which bound was crossed
    pub fn try_get(&self, row: usize, col: usize) -> Result<&CellValue> {
        let cells = self.rows.get(row).ok_or(Error::RowOutOfBounds {
            row,
            rows: self.rows.len(),
        })?;
        cells.get(col).ok_or(Error::ColumnOutOfBounds {
            row,
            col,
            cols: cells.len(),
        })
    }

    /// Replace the value of an existing cell
    pub fn set<V: Into<CellValue>>(&mut self, row: usize, col: usize, value: V) -> Result<()> {
        let rows = self.rows.len();
        let cells = self
            .rows
            .get_mut(row)
            .ok_or(Error::RowOutOfBounds { row, rows })?;
        let cols = cells.len();
        let cell = cells
            .get_mut(col)
            .ok_or(Error::ColumnOutOfBounds { row, col, cols })?;
        *cell = value.into();
        Ok(())
    }
}
