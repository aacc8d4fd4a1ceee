//! The forecast session
//!
//! One run of the pipeline: load, resolve columns, clean, aggregate, fit,
//! evaluate. The session object owns the configuration for a single
//! invocation and every intermediate entity dies with it; nothing is shared
//! across runs.

use std::collections::HashSet;

use crate::error::{SalescastError, SalescastResult};
use crate::forecast::{self, ForecastOptions};
use crate::models::{AccuracySummary, Forecast, MonthlyPoint};
use crate::services::aggregator::aggregate_monthly;
use crate::services::loader::{self, ColumnSpec};
use crate::services::normalizer::{self, NormalizerOptions};

/// Everything a single run needs to know
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Column names, or `None` for auto-detection
    pub columns: ColumnSpec,
    /// Date format tried first when parsing
    pub date_format: Option<String>,
    /// Category values to retain; empty or absent means no filter
    pub categories: Option<HashSet<String>>,
    /// Model options
    pub forecast: ForecastOptions,
}

/// The results of one completed run
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    /// Monthly history the model was fitted on
    pub history: Vec<MonthlyPoint>,
    /// In-sample fit plus the future window
    pub forecast: Forecast,
    /// In-sample accuracy; `None` when every actual was zero
    pub accuracy: Option<AccuracySummary>,
    /// Cleaned rows that survived normalization
    pub clean_rows: usize,
}

/// A session-scoped pipeline run
#[derive(Debug, Clone)]
pub struct ForecastSession {
    config: SessionConfig,
}

impl ForecastSession {
    /// Create a session from configuration
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over CSV bytes
    ///
    /// Halts with `EmptyData` before any model fitting when cleaning or
    /// filtering drops every row.
    pub fn run(&self, bytes: &[u8]) -> SalescastResult<SessionOutcome> {
        let table = loader::load_csv(bytes)?;
        let columns = loader::resolve_columns(&table, &self.config.columns)?;

        let options = NormalizerOptions {
            date_format: self
                .config
                .date_format
                .clone()
                .unwrap_or_else(|| "%Y-%m-%d".to_string()),
            categories: self.config.categories.clone(),
        };
        let records = normalizer::normalize(&table, columns, &options);
        if records.is_empty() {
            return Err(SalescastError::EmptyData(
                "every row was dropped by cleaning or filtering".into(),
            ));
        }

        let history = aggregate_monthly(&records);
        let forecast = forecast::run_forecast(&history, &self.config.forecast)?;
        let accuracy = forecast::evaluate_accuracy(&history, &forecast);

        Ok(SessionOutcome {
            history,
            forecast,
            accuracy,
            clean_rows: records.len(),
        })
    }
}
