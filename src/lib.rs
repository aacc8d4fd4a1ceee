//! Salescast - Terminal-based retail sales forecasting
//!
//! This library provides the core functionality for the salescast CLI: it
//! ingests a retail sales CSV, aggregates it to monthly totals, fits a
//! trend/seasonality model, and produces a forecast with confidence
//! intervals plus an accuracy summary.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Settings file and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, series, forecast points)
//! - `services`: The pipeline stages (load, clean, aggregate) and the session
//! - `forecast`: The model seam and the smoothing forecaster
//! - `reports`: Summary metrics over a completed run
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON export of the forecast window
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use salescast::services::{ForecastSession, SessionConfig};
//!
//! let session = ForecastSession::new(SessionConfig::default());
//! let outcome = session.run(&csv_bytes)?;
//! println!("{} forecast points", outcome.forecast.future().len());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forecast;
pub mod models;
pub mod reports;
pub mod services;

pub use error::{SalescastError, SalescastResult};
