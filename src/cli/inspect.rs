//! The inspect command
//!
//! Shows what the loader sees in a file before forecasting: the header row,
//! which columns auto-detection would pick, and a few sample rows. Useful
//! for deciding whether `--date-column`/`--sales-column` are needed.

use std::path::PathBuf;

use clap::Args;

use crate::error::{SalescastError, SalescastResult};
use crate::services::detect;
use crate::services::loader;

/// Arguments for `salescast inspect`
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the sales CSV file
    pub file: PathBuf,
}

const SAMPLE_ROWS: usize = 5;

/// Handle the inspect command
pub fn handle_inspect_command(args: InspectArgs) -> SalescastResult<()> {
    let bytes = std::fs::read(&args.file)
        .map_err(|e| SalescastError::Io(format!("Failed to read {}: {}", args.file.display(), e)))?;
    let table = loader::load_csv(&bytes)?;

    let date_guess = detect::detect_date_column(&table.headers);
    let sales_guess = detect::detect_sales_column(&table.headers);

    println!("File: {}", args.file.display());
    println!("Rows: {}", table.len());
    println!();
    println!("Columns:");
    for (idx, header) in table.headers.iter().enumerate() {
        let marker = if Some(idx) == date_guess {
            "  <- date (detected)"
        } else if Some(idx) == sales_guess {
            "  <- sales (detected)"
        } else {
            ""
        };
        println!("  [{idx}] {header}{marker}");
    }

    if date_guess.is_none() {
        println!();
        println!("No date-like column detected; pass --date-column to name one.");
    }
    if sales_guess.is_none() {
        println!("No sales-like column detected; pass --sales-column to name one.");
    }

    if !table.is_empty() {
        println!();
        println!("Sample rows:");
        for row in table.rows.iter().take(SAMPLE_ROWS) {
            println!("  {}", row.join(" | "));
        }
    }

    Ok(())
}
