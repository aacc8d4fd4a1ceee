//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the pipeline.

pub mod forecast;
pub mod inspect;

pub use forecast::{handle_forecast_command, ExportFormat, ForecastArgs};
pub use inspect::{handle_inspect_command, InspectArgs};
