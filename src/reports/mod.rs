//! Reports module for Salescast
//!
//! Turns a completed session into the numbers the terminal shows: summary
//! metrics and the forecast-window table.

pub mod summary;

pub use summary::ForecastReport;
