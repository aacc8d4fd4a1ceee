//! Exponential smoothing models
//!
//! The default forecaster: seasonal (Holt-Winters) smoothing when the history
//! covers at least two full yearly cycles, downgrading to Holt's linear trend
//! and then to simple smoothing as the history shrinks. Each model records
//! its one-step-ahead in-sample estimates during fitting; those drive both
//! the accuracy summary and the interval band.
//!
//! ## Parameters
//!
//! - `alpha` (level): higher values react faster to recent months
//! - `beta` (trend): trend smoothing
//! - `gamma` (seasonal): seasonal smoothing

use crate::error::{SalescastError, SalescastResult};
use crate::forecast::{FittedModel, Forecaster, SeasonalityMode};

const DEFAULT_ALPHA: f64 = 0.3;
const DEFAULT_BETA: f64 = 0.1;
const DEFAULT_GAMMA: f64 = 0.2;

/// Months per seasonal cycle
const YEARLY_PERIOD: usize = 12;

/// The smoothing-family forecaster with length-based model selection
#[derive(Debug, Clone)]
pub struct SeasonalSmoothing {
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    mode: SeasonalityMode,
}

impl Default for SeasonalSmoothing {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            gamma: DEFAULT_GAMMA,
            period: YEARLY_PERIOD,
            mode: SeasonalityMode::Additive,
        }
    }
}

impl SeasonalSmoothing {
    /// Create a forecaster with explicit smoothing parameters
    ///
    /// All three parameters must lie strictly between 0 and 1; the period
    /// must be at least 2.
    pub fn new(
        alpha: f64,
        beta: f64,
        gamma: f64,
        period: usize,
        mode: SeasonalityMode,
    ) -> SalescastResult<Self> {
        for (name, value) in [("alpha", alpha), ("beta", beta), ("gamma", gamma)] {
            if !(0.0 < value && value < 1.0) {
                return Err(SalescastError::invalid_parameter(
                    name,
                    "must be between 0 and 1 (exclusive)",
                ));
            }
        }
        if period < 2 {
            return Err(SalescastError::invalid_parameter(
                "period",
                "must be at least 2",
            ));
        }
        Ok(Self {
            alpha,
            beta,
            gamma,
            period,
            mode,
        })
    }

    /// Default parameters with the given seasonality mode
    pub fn with_mode(mode: SeasonalityMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }
}

impl Forecaster for SeasonalSmoothing {
    /// Fit the longest model the history supports
    ///
    /// >= 2 seasonal cycles: Holt-Winters; >= 3 points: Holt's linear trend;
    /// >= 2 points: simple smoothing; fewer is a forecast error.
    fn fit(&self, series: &[f64]) -> SalescastResult<Box<dyn FittedModel>> {
        if series.len() < 2 {
            return Err(SalescastError::Forecast(format!(
                "need at least 2 data points to fit, got {}",
                series.len()
            )));
        }
        if series.iter().any(|v| !v.is_finite()) {
            return Err(SalescastError::Forecast(
                "series contains non-finite values".into(),
            ));
        }

        if series.len() >= 2 * self.period {
            Ok(Box::new(SeasonalFit::fit(self, series)))
        } else if series.len() >= 3 {
            Ok(Box::new(TrendFit::fit(self.alpha, self.beta, series)))
        } else {
            Ok(Box::new(LevelFit::fit(self.alpha, series)))
        }
    }
}

/// Simple exponential smoothing: flat forecasts from a smoothed level
#[derive(Debug, Clone)]
struct LevelFit {
    level: f64,
    fitted: Vec<f64>,
}

impl LevelFit {
    fn fit(alpha: f64, series: &[f64]) -> Self {
        let mut level = series[0];
        let mut fitted = Vec::with_capacity(series.len());
        fitted.push(series[0]);

        for &value in &series[1..] {
            fitted.push(level);
            level = alpha * value + (1.0 - alpha) * level;
        }

        Self { level, fitted }
    }
}

impl FittedModel for LevelFit {
    fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    fn predict(&self, steps: usize) -> Vec<f64> {
        vec![self.level; steps]
    }
}

/// Holt's linear trend method
#[derive(Debug, Clone)]
struct TrendFit {
    level: f64,
    trend: f64,
    fitted: Vec<f64>,
}

impl TrendFit {
    fn fit(alpha: f64, beta: f64, series: &[f64]) -> Self {
        let mut level = series[0];
        let mut trend = series[1] - series[0];
        let mut fitted = Vec::with_capacity(series.len());
        fitted.push(series[0]);

        for &value in &series[1..] {
            fitted.push(level + trend);
            let prev_level = level;
            level = alpha * value + (1.0 - alpha) * (level + trend);
            trend = beta * (level - prev_level) + (1.0 - beta) * trend;
        }

        Self {
            level,
            trend,
            fitted,
        }
    }
}

impl FittedModel for TrendFit {
    fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    fn predict(&self, steps: usize) -> Vec<f64> {
        (1..=steps)
            .map(|h| self.level + h as f64 * self.trend)
            .collect()
    }
}

/// Holt-Winters triple smoothing with additive or multiplicative seasonality
#[derive(Debug, Clone)]
struct SeasonalFit {
    level: f64,
    trend: f64,
    seasonal: Vec<f64>,
    period: usize,
    mode: SeasonalityMode,
    fitted: Vec<f64>,
}

impl SeasonalFit {
    fn fit(params: &SeasonalSmoothing, series: &[f64]) -> Self {
        let period = params.period;
        let (alpha, beta, gamma) = (params.alpha, params.beta, params.gamma);

        // Initialize level from the first cycle and trend from the first two
        let first_avg: f64 = series[..period].iter().sum::<f64>() / period as f64;
        let second_avg: f64 = series[period..2 * period].iter().sum::<f64>() / period as f64;
        let mut level = first_avg;
        let mut trend = (second_avg - first_avg) / period as f64;

        let mut seasonal: Vec<f64> = match params.mode {
            SeasonalityMode::Additive => {
                series[..period].iter().map(|v| v - level).collect()
            }
            SeasonalityMode::Multiplicative => series[..period]
                .iter()
                .map(|v| if level.abs() > 1e-10 { v / level } else { 1.0 })
                .collect(),
        };

        // The first cycle seeds the seasonal factors, so its in-sample
        // estimates reproduce the observations exactly.
        let mut fitted = series[..period].to_vec();

        for (i, &value) in series.iter().enumerate().skip(period) {
            let idx = i % period;
            let prev_seasonal = seasonal[idx];

            let one_step_ahead = match params.mode {
                SeasonalityMode::Additive => level + trend + prev_seasonal,
                SeasonalityMode::Multiplicative => (level + trend) * prev_seasonal,
            };
            fitted.push(one_step_ahead);

            let prev_level = level;
            match params.mode {
                SeasonalityMode::Additive => {
                    level = alpha * (value - prev_seasonal) + (1.0 - alpha) * (level + trend);
                    trend = beta * (level - prev_level) + (1.0 - beta) * trend;
                    seasonal[idx] = gamma * (value - level) + (1.0 - gamma) * prev_seasonal;
                }
                SeasonalityMode::Multiplicative => {
                    let deseasonalized = if prev_seasonal.abs() > 1e-10 {
                        value / prev_seasonal
                    } else {
                        value
                    };
                    level = alpha * deseasonalized + (1.0 - alpha) * (level + trend);
                    trend = beta * (level - prev_level) + (1.0 - beta) * trend;
                    seasonal[idx] = if level.abs() > 1e-10 {
                        gamma * (value / level) + (1.0 - gamma) * prev_seasonal
                    } else {
                        prev_seasonal
                    };
                }
            }
        }

        Self {
            level,
            trend,
            seasonal,
            period,
            mode: params.mode,
            fitted,
        }
    }
}

impl FittedModel for SeasonalFit {
    fn fitted(&self) -> &[f64] {
        &self.fitted
    }

    fn predict(&self, steps: usize) -> Vec<f64> {
        (1..=steps)
            .map(|h| {
                let idx = (self.fitted.len() + h - 1) % self.period;
                match self.mode {
                    SeasonalityMode::Additive => {
                        self.level + h as f64 * self.trend + self.seasonal[idx]
                    }
                    SeasonalityMode::Multiplicative => {
                        (self.level + h as f64 * self.trend) * self.seasonal[idx]
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(series: &[f64]) -> Box<dyn FittedModel> {
        SeasonalSmoothing::default().fit(series).unwrap()
    }

    #[test]
    fn test_constant_series_is_exact() {
        let series = vec![1000.0; 24];
        let model = fit(&series);

        for (&actual, &estimate) in series.iter().zip(model.fitted()) {
            assert!((actual - estimate).abs() < 1e-9);
        }
        for value in model.predict(6) {
            assert!((value - 1000.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_trend_model_extrapolates() {
        // 12 months: too short for the seasonal model, picks the trend model
        let series: Vec<f64> = (0..12).map(|i| 100.0 + 10.0 * i as f64).collect();
        let model = fit(&series);
        let forecast = model.predict(3);

        assert!(forecast[0] > series[series.len() - 1]);
        assert!(forecast[1] > forecast[0]);
        assert!(forecast[2] > forecast[1]);
    }

    #[test]
    fn test_level_model_is_flat() {
        let series = vec![100.0, 120.0];
        let model = fit(&series);
        let forecast = model.predict(4);
        assert!(forecast.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
    }

    #[test]
    fn test_fitted_length_matches_series() {
        for len in [2, 3, 11, 24, 36] {
            let series: Vec<f64> = (0..len).map(|i| 50.0 + i as f64).collect();
            let model = fit(&series);
            assert_eq!(model.fitted().len(), len, "length {len}");
        }
    }

    #[test]
    fn test_seasonal_model_tracks_cycle() {
        // Strong December spike over three years
        let series: Vec<f64> = (0..36)
            .map(|i| 1000.0 + if i % 12 == 11 { 500.0 } else { 0.0 })
            .collect();
        let model = fit(&series);

        // Horizon covers the next year; month 12 of the window is December
        let forecast = model.predict(12);
        let december = forecast[11];
        let november = forecast[10];
        assert!(
            december > november + 250.0,
            "expected a December spike, got nov={november} dec={december}"
        );
    }

    #[test]
    fn test_multiplicative_handles_zero_level() {
        let series = vec![0.0; 24];
        let model = SeasonalSmoothing::with_mode(SeasonalityMode::Multiplicative)
            .fit(&series)
            .unwrap();
        assert!(model.predict(3).iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_insufficient_data() {
        let err = SeasonalSmoothing::default().fit(&[42.0]).unwrap_err();
        assert!(matches!(err, SalescastError::Forecast(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = SeasonalSmoothing::default()
            .fit(&[1.0, f64::NAN, 2.0])
            .unwrap_err();
        assert!(matches!(err, SalescastError::Forecast(_)));
    }

    #[test]
    fn test_parameter_validation() {
        assert!(SeasonalSmoothing::new(0.0, 0.1, 0.2, 12, SeasonalityMode::Additive).is_err());
        assert!(SeasonalSmoothing::new(0.3, 1.0, 0.2, 12, SeasonalityMode::Additive).is_err());
        assert!(SeasonalSmoothing::new(0.3, 0.1, 0.2, 1, SeasonalityMode::Additive).is_err());
        assert!(SeasonalSmoothing::new(0.3, 0.1, 0.2, 12, SeasonalityMode::Additive).is_ok());
    }
}
