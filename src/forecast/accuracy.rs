//! Forecast accuracy
//!
//! Compares historical actuals against the in-sample fit and summarizes the
//! mean absolute percentage error. Months with zero actual sales contribute
//! an undefined term and are excluded from the average instead of poisoning
//! it with a division by zero.

use crate::models::{AccuracySummary, Forecast, MonthlyPoint};

/// Summarize in-sample accuracy
///
/// Pairs are aligned by month. Returns `None` when no month has a nonzero
/// actual to divide by; the caller reports accuracy as unavailable.
pub fn evaluate_accuracy(
    history: &[MonthlyPoint],
    forecast: &Forecast,
) -> Option<AccuracySummary> {
    let mut terms = Vec::with_capacity(history.len());

    for (actual, estimate) in history.iter().zip(forecast.in_sample()) {
        debug_assert_eq!(actual.month, estimate.month);
        let a = actual.total_sales.to_dollars();
        if a == 0.0 {
            continue;
        }
        let p = estimate.estimate.to_dollars();
        terms.push(((a - p) / a).abs());
    }

    if terms.is_empty() {
        return None;
    }

    let mape = terms.iter().sum::<f64>() / terms.len() as f64 * 100.0;
    Some(AccuracySummary {
        mape,
        accuracy: 100.0 - mape,
    })
}
