//! Configuration module for Salescast
//!
//! This module provides configuration management including:
//! - Platform config-dir path resolution
//! - Default model and presentation settings persistence

pub mod paths;
pub mod settings;

pub use paths::SalescastPaths;
pub use settings::Settings;
