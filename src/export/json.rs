//! JSON Export functionality
//!
//! The same forecast window as the CSV export, for programmatic consumers.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::{SalescastError, SalescastResult};
use crate::models::Forecast;

/// One exported forecast row, values in dollars
#[derive(Debug, Serialize, Deserialize)]
pub struct ForecastRow {
    pub date: String,
    pub forecast: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// Export the forecast window as a JSON array
pub fn export_forecast_json<W: Write>(
    forecast: &Forecast,
    writer: &mut W,
    pretty: bool,
) -> SalescastResult<()> {
    let rows: Vec<ForecastRow> = forecast
        .future()
        .iter()
        .map(|p| ForecastRow {
            date: p.month.first_day().format("%Y-%m-%d").to_string(),
            forecast: p.estimate.to_dollars(),
            lower_bound: p.lower.to_dollars(),
            upper_bound: p.upper.to_dollars(),
        })
        .collect();

    let result = if pretty {
        serde_json::to_writer_pretty(&mut *writer, &rows)
    } else {
        serde_json::to_writer(&mut *writer, &rows)
    };
    result.map_err(|e| SalescastError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| SalescastError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ForecastPoint, Money, Month};

    #[test]
    fn test_json_round_trip() {
        let forecast = Forecast {
            points: vec![ForecastPoint {
                month: Month::new(2025, 3),
                estimate: Money::from_cents(123_456),
                lower: Money::from_cents(100_000),
                upper: Money::from_cents(150_000),
            }],
            horizon: 1,
            confidence_level: 0.95,
        };

        let mut buf = Vec::new();
        export_forecast_json(&forecast, &mut buf, false).unwrap();

        let rows: Vec<ForecastRow> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, "2025-03-01");
        assert!((rows[0].forecast - 1234.56).abs() < 1e-9);
        assert!((rows[0].lower_bound - 1000.0).abs() < 1e-9);
    }
}
