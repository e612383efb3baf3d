//! rpn-sheets CLI - resolve the formulas in a CSV file

use anyhow::{Context, Result};
use clap::Parser;
use rpn_sheets::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rpn-sheets")]
#[command(
    author,
    version,
    about = "Evaluate single-operation RPN formulas in a CSV file and print the result"
)]
struct Cli {
    /// Input CSV file
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    resolve_to(&cli.input, stdout.lock())
}

fn resolve_to<W: Write>(input: &Path, out: W) -> Result<()> {
    let mut grid = CsvReader::read_file(input, &CsvReadOptions::default())
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    grid.calculate()
        .with_context(|| format!("Failed to evaluate '{}'", input.display()))?;

    CsvWriter::write(&grid, out, &CsvWriteOptions::default())
        .context("Failed to write to stdout")?;

    Ok(())
}
