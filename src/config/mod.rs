//! Configuration loading and management for the Attendance and Payroll Engine.
//!
//! This module provides functionality to load leave policy configuration
//! from YAML files, including the leave type catalogue and the penalty
//! percents applied to excess leave days.
//!
//! # Example
//!
//! ```no_run
//! use hrms_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave").unwrap();
//! println!("Loaded {} leave types", config.config().leave_types().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LeaveConfig, LeavePenaltiesConfig, LeaveTypeConfig, LeaveTypesConfig};
