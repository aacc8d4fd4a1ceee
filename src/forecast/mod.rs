//! Forecasting
//!
//! The pipeline talks to the model through a narrow seam: a [`Forecaster`]
//! fits a series of monthly dollar values and returns a [`FittedModel`] that
//! exposes in-sample estimates and predicts future values. The default
//! implementation is the exponential-smoothing family in [`smoothing`]; any
//! trend/seasonality forecaster can be swapped in behind the same traits.

pub mod accuracy;
pub mod confidence;
pub mod holidays;
pub mod smoothing;

pub use accuracy::evaluate_accuracy;
pub use smoothing::SeasonalSmoothing;

use std::ops::RangeInclusive;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{SalescastError, SalescastResult};
use crate::models::{Forecast, ForecastPoint, Month, MonthlyPoint};

/// Allowed forecast horizons, in months
pub const HORIZON_RANGE: RangeInclusive<usize> = 3..=24;

/// How the seasonal component combines with level and trend
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityMode {
    /// Observation = level + trend + season
    #[default]
    Additive,
    /// Observation = (level + trend) * season
    Multiplicative,
}

/// Options controlling one forecast run
#[derive(Debug, Clone)]
pub struct ForecastOptions {
    /// Number of future months to predict
    pub horizon: usize,
    /// Seasonal decomposition mode
    pub seasonality: SeasonalityMode,
    /// Apply the US holiday-month adjustment
    pub holidays: bool,
    /// Confidence level for the interval band
    pub confidence_level: f64,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            horizon: 6,
            seasonality: SeasonalityMode::Additive,
            holidays: false,
            confidence_level: 0.95,
        }
    }
}

/// A model fitted to one historical series
pub trait FittedModel: std::fmt::Debug {
    /// One-step-ahead in-sample estimates, one per training point
    fn fitted(&self) -> &[f64];

    /// Predict the next `steps` values past the training range
    fn predict(&self, steps: usize) -> Vec<f64>;
}

/// Anything that can fit a monthly series
pub trait Forecaster {
    fn fit(&self, series: &[f64]) -> SalescastResult<Box<dyn FittedModel>>;
}

/// Fit the default model and produce a full forecast
pub fn run_forecast(
    history: &[MonthlyPoint],
    options: &ForecastOptions,
) -> SalescastResult<Forecast> {
    let forecaster = SeasonalSmoothing::with_mode(options.seasonality);
    run_forecast_with(&forecaster, history, options)
}

/// Fit an arbitrary forecaster and produce a full forecast
///
/// Emits one [`ForecastPoint`] per historical month (the in-sample fit) and
/// one per future month, in ascending order. Interval bounds come from the
/// in-sample residuals and widen with the forecast distance.
pub fn run_forecast_with(
    forecaster: &dyn Forecaster,
    history: &[MonthlyPoint],
    options: &ForecastOptions,
) -> SalescastResult<Forecast> {
    if !HORIZON_RANGE.contains(&options.horizon) {
        return Err(SalescastError::invalid_parameter(
            "horizon",
            format!(
                "must be between {} and {} months",
                HORIZON_RANGE.start(),
                HORIZON_RANGE.end()
            ),
        ));
    }
    if history.len() < 2 {
        return Err(SalescastError::Forecast(format!(
            "need at least 2 months of history, got {}",
            history.len()
        )));
    }

    let months: Vec<Month> = history.iter().map(|p| p.month).collect();
    let series: Vec<f64> = history.iter().map(|p| p.total_sales.to_dollars()).collect();

    let model = forecaster.fit(&series)?;
    let mut fitted = model.fitted().to_vec();
    let mut future = model.predict(options.horizon);

    let mut future_months = Vec::with_capacity(options.horizon);
    let mut cursor = months[months.len() - 1];
    for _ in 0..options.horizon {
        cursor = cursor.next();
        future_months.push(cursor);
    }

    if options.holidays {
        let adjustment = holidays::HolidayAdjustment::estimate(&months, &series, &fitted);
        adjustment.apply(&months, &mut fitted);
        adjustment.apply(&future_months, &mut future);
    }

    let residuals: Vec<f64> = series.iter().zip(&fitted).map(|(a, f)| a - f).collect();
    let band = confidence::IntervalBand::from_residuals(&residuals, options.confidence_level);

    let mut points = Vec::with_capacity(fitted.len() + future.len());
    let width = band.in_sample_half_width();
    for (month, estimate) in months.iter().zip(&fitted) {
        points.push(ForecastPoint::from_dollars(
            *month,
            *estimate,
            estimate - width,
            estimate + width,
        ));
    }
    for (h, (month, estimate)) in future_months.iter().zip(&future).enumerate() {
        let width = band.future_half_width(h + 1);
        points.push(ForecastPoint::from_dollars(
            *month,
            *estimate,
            estimate - width,
            estimate + width,
        ));
    }

    Ok(Forecast {
        points,
        horizon: options.horizon,
        confidence_level: options.confidence_level,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn history(values: &[i64]) -> Vec<MonthlyPoint> {
        let mut month = Month::new(2022, 1);
        values
            .iter()
            .map(|&cents| {
                let point = MonthlyPoint {
                    month,
                    total_sales: Money::from_cents(cents),
                };
                month = month.next();
                point
            })
            .collect()
    }

    #[test]
    fn test_constant_series_fits_flat() {
        // 24 months of $1,000
        let history = history(&[100_000; 24]);
        let options = ForecastOptions::default();
        let forecast = run_forecast(&history, &options).unwrap();

        assert_eq!(forecast.in_sample().len(), 24);
        assert_eq!(forecast.future().len(), 6);

        for point in forecast.future() {
            assert_eq!(point.estimate, Money::from_cents(100_000));
            // Zero residuals mean a degenerate interval
            assert_eq!(point.lower, point.estimate);
            assert_eq!(point.upper, point.estimate);
        }
    }

    #[test]
    fn test_bounds_ordered_everywhere() {
        let history = history(&[
            50_000, 80_000, 120_000, 60_000, 90_000, 110_000, 70_000, 95_000, 130_000, 65_000,
            85_000, 125_000,
        ]);
        let options = ForecastOptions {
            horizon: 12,
            ..Default::default()
        };
        let forecast = run_forecast(&history, &options).unwrap();

        for point in &forecast.points {
            assert!(point.lower <= point.estimate);
            assert!(point.estimate <= point.upper);
        }
    }

    #[test]
    fn test_future_months_follow_history() {
        let history = history(&[10_000; 5]);
        let forecast = run_forecast(&history, &ForecastOptions::default()).unwrap();
        // History ends 2022-05, so the window starts 2022-06
        assert_eq!(forecast.future()[0].month, Month::new(2022, 6));
        assert_eq!(forecast.future()[5].month, Month::new(2022, 11));
    }

    #[test]
    fn test_horizon_out_of_range() {
        let history = history(&[10_000; 12]);
        let options = ForecastOptions {
            horizon: 36,
            ..Default::default()
        };
        let err = run_forecast(&history, &options).unwrap_err();
        assert!(matches!(err, SalescastError::InvalidParameter { .. }));
    }

    #[test]
    fn test_too_little_history() {
        let history = history(&[10_000]);
        let err = run_forecast(&history, &ForecastOptions::default()).unwrap_err();
        assert!(matches!(err, SalescastError::Forecast(_)));
    }

    #[test]
    fn test_interval_widens_with_distance() {
        let history = history(&[
            50_000, 80_000, 120_000, 60_000, 90_000, 110_000, 70_000, 95_000, 130_000, 65_000,
            85_000, 125_000,
        ]);
        let forecast = run_forecast(&history, &ForecastOptions::default()).unwrap();
        let future = forecast.future();

        let first_width = future[0].upper.cents() - future[0].lower.cents();
        let last_width = future[5].upper.cents() - future[5].lower.cents();
        assert!(last_width > first_width);
    }

    #[test]
    fn test_multiplicative_mode_runs() {
        let values: Vec<i64> = (0..24)
            .map(|i| 100_000 + 2_000 * i + if i % 12 == 11 { 30_000 } else { 0 })
            .collect();
        let history = history(&values);
        let options = ForecastOptions {
            seasonality: SeasonalityMode::Multiplicative,
            ..Default::default()
        };
        let forecast = run_forecast(&history, &options).unwrap();
        assert_eq!(forecast.future().len(), 6);
        assert!(forecast.future().iter().all(|p| p.estimate.cents() > 0));
    }
}
