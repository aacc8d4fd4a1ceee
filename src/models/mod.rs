//! Core data models for Salescast
//!
//! This module contains the data structures flowing through the forecasting
//! pipeline: monetary amounts, calendar months, cleaned records, monthly
//! aggregates, and forecast points.

pub mod money;
pub mod month;
pub mod series;

pub use money::Money;
pub use month::Month;
pub use series::{AccuracySummary, CleanRecord, Forecast, ForecastPoint, MonthlyPoint};
