//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! policy configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{LeaveConfig, LeavePenaltiesConfig, LeaveTypeConfig, LeaveTypesConfig};

/// Loads and provides access to leave configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query leave types and penalty percents.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/leave/
/// ├── leave_types.yaml  # Leave type catalogue
/// └── penalties.yaml    # Excess-day penalty percents
/// ```
///
/// # Example
///
/// ```no_run
/// use hrms_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/leave").unwrap();
///
/// // Get a leave type
/// let leave_type = loader.get_leave_type("AL").unwrap();
/// println!("Leave type: {}", leave_type.name);
///
/// // Get the penalty percent for excess days of a leave type
/// let percent = loader.get_penalty_percent("AL");
/// println!("Penalty: {}%", percent);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: LeaveConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/leave")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hrms_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/leave")?;
    /// # Ok::<(), hrms_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load leave_types.yaml
        let leave_types_path = path.join("leave_types.yaml");
        let leave_types_config = Self::load_yaml::<LeaveTypesConfig>(&leave_types_path)?;

        // Load penalties.yaml
        let penalties_path = path.join("penalties.yaml");
        let penalties_config = Self::load_yaml::<LeavePenaltiesConfig>(&penalties_path)?;

        let config = LeaveConfig::new(
            leave_types_config.leave_types,
            penalties_config.penalties,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying leave configuration.
    pub fn config(&self) -> &LeaveConfig {
        &self.config
    }

    /// Consumes the loader, returning the leave configuration.
    pub fn into_config(self) -> LeaveConfig {
        self.config
    }

    /// Gets a leave type by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The leave type code (e.g., "AL")
    ///
    /// # Returns
    ///
    /// Returns the leave type if found, or `LeaveTypeNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use hrms_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/leave")?;
    /// let leave_type = loader.get_leave_type("AL")?;
    /// println!("Leave type: {}", leave_type.name);
    /// # Ok::<(), hrms_engine::error::EngineError>(())
    /// ```
    pub fn get_leave_type(&self, code: &str) -> EngineResult<&LeaveTypeConfig> {
        self.config.leave_type(code)
    }

    /// Gets the penalty percent for excess days of a leave type.
    ///
    /// Returns zero for leave types with no configured penalty, so an
    /// unknown code is treated as penalty-free rather than an error.
    pub fn get_penalty_percent(&self, code: &str) -> Decimal {
        self.config.penalty_percent(code)
    }
}
