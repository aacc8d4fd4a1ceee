//! The forecast command
//!
//! Runs the full pipeline over a CSV file, prints the summary metrics, the
//! history/forecast chart, and the results table, and optionally exports the
//! forecast window.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display;
use crate::error::{SalescastError, SalescastResult};
use crate::export::{export_forecast_csv, export_forecast_json};
use crate::forecast::{ForecastOptions, SeasonalityMode};
use crate::reports::ForecastReport;
use crate::services::{ColumnSpec, ForecastSession, SessionConfig};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV with a header row
    Csv,
    /// JSON array of forecast rows
    Json,
}

/// Arguments for `salescast forecast`
#[derive(Args, Debug)]
pub struct ForecastArgs {
    /// Path to the sales CSV file
    pub file: PathBuf,

    /// Forecast horizon in months
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(3..=24))]
    pub horizon: Option<u64>,

    /// Seasonality mode
    #[arg(short, long, value_enum)]
    pub seasonality: Option<SeasonalityMode>,

    /// Apply the US holiday-month adjustment
    #[arg(long)]
    pub holidays: bool,

    /// Name of the date column (auto-detected when omitted)
    #[arg(long)]
    pub date_column: Option<String>,

    /// Name of the sales column (auto-detected when omitted)
    #[arg(long)]
    pub sales_column: Option<String>,

    /// Name of the category column used for filtering
    #[arg(long)]
    pub category_column: Option<String>,

    /// Category value to retain; repeat for a multi-select
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Write the forecast window to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format for --output
    #[arg(long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Suppress the chart
    #[arg(short, long)]
    pub quiet: bool,
}

/// Handle the forecast command
pub fn handle_forecast_command(settings: &Settings, args: ForecastArgs) -> SalescastResult<()> {
    let bytes = std::fs::read(&args.file)
        .map_err(|e| SalescastError::Io(format!("Failed to read {}: {}", args.file.display(), e)))?;

    let categories: Option<HashSet<String>> = if args.categories.is_empty() {
        None
    } else {
        Some(args.categories.iter().cloned().collect())
    };

    let config = SessionConfig {
        columns: ColumnSpec {
            date: args.date_column,
            sales: args.sales_column,
            category: args.category_column,
        },
        date_format: Some(settings.date_format.clone()),
        categories,
        forecast: ForecastOptions {
            horizon: args
                .horizon
                .map(|h| h as usize)
                .unwrap_or(settings.default_horizon),
            seasonality: args.seasonality.unwrap_or(settings.seasonality_mode),
            holidays: args.holidays,
            confidence_level: settings.confidence_level,
        },
    };

    let outcome = ForecastSession::new(config).run(&bytes)?;
    let report = ForecastReport::generate(&outcome);

    println!("{}", display::render_metrics(&report));
    if !args.quiet {
        println!("{}", display::render_chart(&outcome.history, &report.window));
    }
    println!("{}", display::render_window_table(&report.window));

    if let Some(path) = &args.output {
        let file = File::create(path).map_err(|e| {
            SalescastError::Export(format!("Failed to create {}: {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);

        match args.format {
            ExportFormat::Csv => export_forecast_csv(&outcome.forecast, &mut writer)?,
            ExportFormat::Json => export_forecast_json(&outcome.forecast, &mut writer, true)?,
        }
        writer
            .flush()
            .map_err(|e| SalescastError::Export(e.to_string()))?;

        println!();
        println!("Forecast exported to: {}", path.display());
    }

    Ok(())
}
