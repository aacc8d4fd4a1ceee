//! Custom error types for Salescast
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Salescast operations
#[derive(Error, Debug)]
pub enum SalescastError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// The input could not be read as CSV
    #[error("Parse error: {0}")]
    Parse(String),

    /// Required columns are missing from the input
    #[error("Missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Cleaning or filtering removed every row
    #[error("No usable data: {0}")]
    EmptyData(String),

    /// Model fitting or prediction failed
    #[error("Forecast error: {0}")]
    Forecast(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl SalescastError {
    /// Create a schema error for a single missing column
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::Schema {
            missing: vec![name.into()],
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error halts the run before any forecast is attempted
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::Schema { .. } | Self::EmptyData(_)
        )
    }

    /// Check if this is a schema error
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SalescastError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for SalescastError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for SalescastError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Salescast operations
pub type SalescastResult<T> = Result<T, SalescastError>;
