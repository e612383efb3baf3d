//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use rpn_sheets_core::{CellValue, Grid};

/// CSV reader producing a [`Grid`] of raw text cells
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a grid
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV text into a grid
    pub fn read_str(text: &str, options: &CsvReadOptions) -> CsvResult<Grid> {
        Self::read(text.as_bytes(), options)
    }

    /// Read CSV from a reader into a grid
    ///
    /// Every record becomes one row, with no header row and no requirement
    /// that rows share a length. The whole input is read before returning.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let trim = if options.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .trim(trim)
            .from_reader(reader);

        let mut grid = Grid::new();
        for result in csv_reader.records() {
            let record = result?;
            grid.push_row(record.iter().map(CellValue::text));
        }

        log::debug!(
            "Read {} rows ({} cells, {} formulas)",
            grid.row_count(),
            grid.cell_count(),
            grid.formula_count()
        );
        Ok(grid)
    }
}
