//! User settings for Salescast
//!
//! Defaults for the model and presentation layer: forecast horizon,
//! seasonality mode, interval confidence level, currency symbol, and the
//! preferred date format tried first when parsing. Command-line flags always
//! override these; nothing from an individual run is written back.

use serde::{Deserialize, Serialize};

use super::paths::SalescastPaths;
use crate::error::SalescastError;
use crate::forecast::SeasonalityMode;

/// User settings for Salescast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default forecast horizon in months
    #[serde(default = "default_horizon")]
    pub default_horizon: usize,

    /// Default seasonality mode
    #[serde(default)]
    pub seasonality_mode: SeasonalityMode,

    /// Confidence level for the interval band (0.80, 0.90, 0.95, 0.99)
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format tried first when parsing the date column (strftime)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_horizon() -> usize {
    6
}

fn default_confidence_level() -> f64 {
    0.95
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_horizon: default_horizon(),
            seasonality_mode: SeasonalityMode::default(),
            confidence_level: default_confidence_level(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SalescastPaths) -> Result<Self, SalescastError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SalescastError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SalescastError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SalescastPaths) -> Result<(), SalescastError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SalescastError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| SalescastError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values a forecast run could not use
    pub fn validate(&self) -> Result<(), SalescastError> {
        if !(0.5..1.0).contains(&self.confidence_level) {
            return Err(SalescastError::invalid_parameter(
                "confidence_level",
                "must be at least 0.5 and below 1.0",
            ));
        }
        if !crate::forecast::HORIZON_RANGE.contains(&self.default_horizon) {
            return Err(SalescastError::invalid_parameter(
                "default_horizon",
                format!(
                    "must be between {} and {} months",
                    crate::forecast::HORIZON_RANGE.start(),
                    crate::forecast::HORIZON_RANGE.end()
                ),
            ));
        }
        Ok(())
    }
}
