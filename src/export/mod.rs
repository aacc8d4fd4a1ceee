//! Export module for Salescast
//!
//! Writes the forecast window for downstream consumers: CSV with a header
//! row, or JSON for programmatic use. Exports carry raw decimal values so
//! they round-trip; currency formatting stays in the terminal.

pub mod csv;
pub mod json;

pub use csv::export_forecast_csv;
pub use json::export_forecast_json;
