//! Forecast summary report
//!
//! Derives the headline metrics from one session outcome: average and latest
//! monthly sales, model accuracy, the projected total over the forecast
//! window, and year-over-year growth when the history reaches back far
//! enough.

use crate::models::{AccuracySummary, ForecastPoint, Money, MonthlyPoint};
use crate::services::SessionOutcome;

/// Headline numbers plus the forecast window
#[derive(Debug, Clone)]
pub struct ForecastReport {
    /// Mean of the monthly totals
    pub average_monthly_sales: Money,
    /// The most recent historical month
    pub latest: MonthlyPoint,
    /// In-sample accuracy; `None` when every actual was zero
    pub accuracy: Option<AccuracySummary>,
    /// Sum of point estimates over the forecast window
    pub projected_total: Money,
    /// Latest month vs the same month a year earlier, in percent
    pub yoy_growth: Option<f64>,
    /// The future window, one point per horizon month
    pub window: Vec<ForecastPoint>,
}

impl ForecastReport {
    /// Build the report for a completed session
    ///
    /// The session guarantees at least one historical month, so `latest`
    /// always exists.
    pub fn generate(outcome: &SessionOutcome) -> Self {
        let history = &outcome.history;
        let total: Money = history.iter().map(|p| p.total_sales).sum();
        let average_monthly_sales = Money::from_cents(total.cents() / history.len() as i64);
        let latest = history[history.len() - 1];

        let yoy_growth = year_over_year(history, latest);

        Self {
            average_monthly_sales,
            latest,
            accuracy: outcome.accuracy,
            projected_total: outcome.forecast.projected_total(),
            yoy_growth,
            window: outcome.forecast.future().to_vec(),
        }
    }
}

/// Growth of the latest month against the same calendar month a year before
///
/// `None` when that month is missing from the history or had zero sales.
fn year_over_year(history: &[MonthlyPoint], latest: MonthlyPoint) -> Option<f64> {
    let mut prior_month = latest.month;
    for _ in 0..12 {
        prior_month = prior_month.prev();
    }

    let prior = history.iter().find(|p| p.month == prior_month)?;
    if prior.total_sales.is_zero() {
        return None;
    }

    let current = latest.total_sales.to_dollars();
    let baseline = prior.total_sales.to_dollars();
    Some((current / baseline - 1.0) * 100.0)
}
