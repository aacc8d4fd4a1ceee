//! Row cleaning
//!
//! Turns the raw table into [`CleanRecord`]s: dates parsed with a
//! multi-format ladder, sales amounts parsed leniently, rows with an
//! unparseable date or sales value dropped rather than failing the file,
//! optional category filtering, chronological sort.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{CleanRecord, Money};
use crate::services::loader::{RawTable, ResolvedColumns};

/// Fallback formats tried after the configured one
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%m/%d/%Y", "%m/%d/%y", "%d/%m/%Y", "%d/%m/%y", "%Y/%m/%d", "%m-%d-%Y",
    "%d-%m-%Y",
];

/// Cleaning options
#[derive(Debug, Clone)]
pub struct NormalizerOptions {
    /// Date format tried first (strftime)
    pub date_format: String,
    /// Category values to retain; `None` or empty set means no filtering
    pub categories: Option<HashSet<String>>,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            categories: None,
        }
    }
}

/// Parse a date string using multiple format attempts
///
/// `None` stands in for the null sentinel: the caller drops the row.
pub fn parse_date(s: &str, primary_format: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, primary_format) {
        return Some(date);
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    None
}

/// Clean the raw table into records ready for aggregation
///
/// Rows survive only when both the date and the sales value parse. The
/// category filter applies only when a category column was resolved and the
/// selection set is non-empty. Output is sorted ascending by date.
pub fn normalize(
    table: &RawTable,
    columns: ResolvedColumns,
    options: &NormalizerOptions,
) -> Vec<CleanRecord> {
    let filter = options.categories.as_ref().filter(|set| !set.is_empty());

    let mut records: Vec<CleanRecord> = table
        .rows
        .iter()
        .filter_map(|row| {
            let date = parse_date(row.get(columns.date)?, &options.date_format)?;
            let sales = Money::parse_field(row.get(columns.sales)?)?;
            let category = columns
                .category
                .and_then(|idx| row.get(idx))
                .map(|s| s.trim().to_string());

            if let (Some(selected), Some(idx)) = (filter, columns.category) {
                let value = row.get(idx).map(|s| s.trim()).unwrap_or("");
                if !selected.contains(value) {
                    return None;
                }
            }

            Some(CleanRecord {
                date,
                sales,
                category,
            })
        })
        .collect();

    records.sort_by_key(|r| r.date);
    records
}
