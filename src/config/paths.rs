//! Path management for Salescast
//!
//! Resolves where the settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `SALESCAST_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/salescast` on Linux,
//!    `~/Library/Application Support` on macOS, `%APPDATA%` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::SalescastError;

/// Manages all paths used by Salescast
#[derive(Debug, Clone)]
pub struct SalescastPaths {
    base_dir: PathBuf,
}

impl SalescastPaths {
    /// Create a new SalescastPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, SalescastError> {
        let base_dir = if let Ok(custom) = std::env::var("SALESCAST_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("", "", "salescast")
                .ok_or_else(|| {
                    SalescastError::Config("Could not determine a config directory".into())
                })?
                .config_dir()
                .to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create SalescastPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), SalescastError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SalescastError::Io(format!("Failed to create config directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SalescastPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var("SALESCAST_DATA_DIR", custom_path);

        let paths = SalescastPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var("SALESCAST_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("salescast");
        let paths = SalescastPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
