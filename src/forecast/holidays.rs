//! US holiday-month adjustment
//!
//! On a monthly series, daily holiday indicators collapse to the months that
//! contain the major retail holidays. The adjustment estimates, per holiday
//! month, the mean gap between actuals and the base model's in-sample fit,
//! then applies that offset to fitted and future values falling in the same
//! calendar month. With a fully seasonal base model the estimated offsets are
//! close to zero; the adjustment matters for the shorter-history fallbacks
//! that carry no seasonal component.

use std::collections::BTreeMap;

use crate::models::Month;

/// Calendar months containing major US retail holidays
pub const US_HOLIDAY_MONTHS: &[(u32, &str)] = &[
    (1, "New Year's Day"),
    (7, "Independence Day"),
    (11, "Thanksgiving"),
    (12, "Christmas"),
];

/// Check whether a month number carries a holiday effect
pub fn is_holiday_month(month: u32) -> bool {
    US_HOLIDAY_MONTHS.iter().any(|(m, _)| *m == month)
}

/// Per-holiday-month offsets, in model space (dollars)
#[derive(Debug, Clone, Default)]
pub struct HolidayAdjustment {
    offsets: BTreeMap<u32, f64>,
}

impl HolidayAdjustment {
    /// Estimate offsets from the historical months and the base fit
    ///
    /// Only holiday months actually present in the history get an offset.
    pub fn estimate(months: &[Month], actual: &[f64], fitted: &[f64]) -> Self {
        let mut residuals: BTreeMap<u32, Vec<f64>> = BTreeMap::new();

        for ((month, a), f) in months.iter().zip(actual).zip(fitted) {
            if is_holiday_month(month.month) {
                residuals.entry(month.month).or_default().push(a - f);
            }
        }

        let offsets = residuals
            .into_iter()
            .map(|(m, rs)| {
                let mean = rs.iter().sum::<f64>() / rs.len() as f64;
                (m, mean)
            })
            .collect();

        Self { offsets }
    }

    /// Shift values whose month carries an estimated offset
    pub fn apply(&self, months: &[Month], values: &mut [f64]) {
        for (month, value) in months.iter().zip(values.iter_mut()) {
            if let Some(offset) = self.offsets.get(&month.month) {
                *value += offset;
            }
        }
    }

    /// Whether any offset was estimated
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn months_from(start: Month, n: usize) -> Vec<Month> {
        let mut out = Vec::with_capacity(n);
        let mut cursor = start;
        for _ in 0..n {
            out.push(cursor);
            cursor = cursor.next();
        }
        out
    }

    #[test]
    fn test_holiday_months() {
        assert!(is_holiday_month(12));
        assert!(is_holiday_month(11));
        assert!(!is_holiday_month(3));
    }

    #[test]
    fn test_estimates_mean_residual_per_month() {
        // Two Decembers, each running $200 above the flat fit
        let months = months_from(Month::new(2023, 1), 24);
        let fitted = vec![1000.0; 24];
        let mut actual = vec![1000.0; 24];
        actual[11] += 150.0;
        actual[23] += 250.0;

        let adj = HolidayAdjustment::estimate(&months, &actual, &fitted);
        let mut future = vec![1000.0; 12];
        let future_months = months_from(Month::new(2025, 1), 12);
        adj.apply(&future_months, &mut future);

        assert!((future[11] - 1200.0).abs() < 1e-9, "december got the offset");
        assert_eq!(future[2], 1000.0, "march untouched");
    }

    #[test]
    fn test_no_holiday_months_in_history() {
        // A short series living entirely in spring
        let months = months_from(Month::new(2024, 3), 3);
        let adj = HolidayAdjustment::estimate(&months, &[10.0, 20.0, 30.0], &[10.0, 20.0, 30.0]);
        assert!(adj.is_empty());
    }

    #[test]
    fn test_perfect_fit_yields_zero_offsets() {
        let months = months_from(Month::new(2023, 1), 24);
        let series = vec![500.0; 24];
        let adj = HolidayAdjustment::estimate(&months, &series, &series);

        let mut values = vec![500.0; 24];
        adj.apply(&months, &mut values);
        assert!(values.iter().all(|v| (*v - 500.0).abs() < 1e-12));
    }
}
