//! Series entities flowing through the pipeline
//!
//! A cleaned row becomes a [`CleanRecord`], the aggregator folds records into
//! [`MonthlyPoint`]s, and the forecaster emits [`ForecastPoint`]s for both the
//! historical range (in-sample fit) and the future window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Money, Month};

/// One cleaned input row: valid date, parsed sales value, optional category
///
/// Immutable once produced by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanRecord {
    pub date: NaiveDate,
    pub sales: Money,
    pub category: Option<String>,
}

/// Total sales for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: Month,
    pub total_sales: Money,
}

impl MonthlyPoint {
    /// First-of-month timestamp for this point
    pub fn period_start(&self) -> NaiveDate {
        self.month.first_day()
    }
}

/// One forecast value with its uncertainty band
///
/// Invariant: `lower <= estimate <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: Month,
    pub estimate: Money,
    pub lower: Money,
    pub upper: Money,
}

impl ForecastPoint {
    /// Build a point from model-space dollar values, clamping the band so the
    /// estimate always sits inside it even after cent rounding
    pub fn from_dollars(month: Month, estimate: f64, lower: f64, upper: f64) -> Self {
        let estimate = Money::from_dollars(estimate);
        let lower = Money::from_dollars(lower).min(estimate);
        let upper = Money::from_dollars(upper).max(estimate);
        Self {
            month,
            estimate,
            lower,
            upper,
        }
    }
}

/// A complete forecast: in-sample fitted points followed by the future window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    /// One point per historical month, then one per future month, ascending
    pub points: Vec<ForecastPoint>,
    /// Number of future months at the tail of `points`
    pub horizon: usize,
    /// Confidence level of the interval band, e.g. 0.95
    pub confidence_level: f64,
}

impl Forecast {
    /// In-sample fitted points over the historical range
    pub fn in_sample(&self) -> &[ForecastPoint] {
        &self.points[..self.points.len() - self.horizon]
    }

    /// The future window of `horizon` points
    pub fn future(&self) -> &[ForecastPoint] {
        &self.points[self.points.len() - self.horizon..]
    }

    /// Sum of point estimates over the future window
    pub fn projected_total(&self) -> Money {
        self.future().iter().map(|p| p.estimate).sum()
    }
}

/// Forecast accuracy derived from the in-sample fit
///
/// `accuracy` is `100 - mape` and is deliberately not clamped: a MAPE above
/// 100% yields a negative accuracy, which is reported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracySummary {
    /// Mean absolute percentage error, in percent
    pub mape: f64,
    /// `100 - mape`
    pub accuracy: f64,
}
