//! CSV Export functionality
//!
//! Exports the forecast window as UTF-8 CSV, one row per horizon month.

use std::io::Write;

use crate::error::{SalescastError, SalescastResult};
use crate::models::Forecast;

/// Export the forecast window to CSV
///
/// Header: `Date,Forecast,Lower Bound,Upper Bound`. Dates are the
/// first-of-month timestamps; values are raw decimals with two places.
pub fn export_forecast_csv<W: Write>(forecast: &Forecast, writer: &mut W) -> SalescastResult<()> {
    writeln!(writer, "Date,Forecast,Lower Bound,Upper Bound")
        .map_err(|e| SalescastError::Export(e.to_string()))?;

    for point in forecast.future() {
        writeln!(
            writer,
            "{},{:.2},{:.2},{:.2}",
            point.month.first_day().format("%Y-%m-%d"),
            point.estimate.to_dollars(),
            point.lower.to_dollars(),
            point.upper.to_dollars()
        )
        .map_err(|e| SalescastError::Export(e.to_string()))?;
    }

    Ok(())
}
