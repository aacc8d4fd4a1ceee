//! Monthly aggregation
//!
//! Folds cleaned records into one total per calendar month. Sums are exact
//! integer cents, so the result is independent of input order.

use std::collections::BTreeMap;

use crate::models::{CleanRecord, Money, Month, MonthlyPoint};

/// Group records by calendar month and sum sales within each group
///
/// Returns one [`MonthlyPoint`] per distinct month, ascending. Months with no
/// records simply do not appear; the forecaster works on the observed series.
pub fn aggregate_monthly(records: &[CleanRecord]) -> Vec<MonthlyPoint> {
    let mut totals: BTreeMap<Month, Money> = BTreeMap::new();

    for record in records {
        *totals.entry(Month::of(record.date)).or_insert(Money::zero()) += record.sales;
    }

    totals
        .into_iter()
        .map(|(month, total_sales)| MonthlyPoint { month, total_sales })
        .collect()
}
