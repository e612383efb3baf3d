//! CSV writer
//!
//! Output is the plain join of each row's cell text: no quoting, no padding
//! of short rows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvWriteOptions;
use rpn_sheets_core::Grid;

/// CSV writer for evaluated grids
pub struct CsvWriter;

impl CsvWriter {
    /// Render a grid as text.
    ///
    /// Cells are joined with the delimiter and rows with the line
    /// terminator. There is no terminator after the last row.
    pub fn to_string(grid: &Grid, options: &CsvWriteOptions) -> String {
        let delimiter = options.delimiter.to_string();
        grid.rows()
            .map(|row| {
                row.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(delimiter.as_str())
            })
            .collect::<Vec<_>>()
            .join(options.line_terminator.as_str())
    }

    /// Write a grid to a file
    pub fn write_file<P: AsRef<Path>>(
        grid: &Grid,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(grid, file, options)
    }

    /// Write a grid to a writer, followed by one final line terminator
    pub fn write<W: Write>(grid: &Grid, mut writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let text = Self::to_string(grid, options);
        writer.write_all(text.as_bytes())?;
        writer.write_all(options.line_terminator.as_str().as_bytes())?;
        writer.flush()?;

        log::debug!("Wrote {} rows", grid.row_count());
        Ok(())
    }
}
