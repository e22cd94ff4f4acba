//! Configuration types for leave policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::ANNUAL_LEAVE_CODE;

/// A leave type offered by the company.
///
/// Leave types define the categories of leave an employee may request
/// and how each category interacts with pay and the annual balance.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypeConfig {
    /// The human-readable name of the leave type.
    pub name: String,
    /// The short code used on requests (e.g., "AL").
    pub code: String,
    /// The maximum number of days that may be taken per year.
    pub max_days_per_year: u32,
    /// Whether days of this type are paid.
    pub is_paid: bool,
}

impl LeaveTypeConfig {
    /// Whether approving days of this type consumes the employee's
    /// annual leave balance.
    ///
    /// Only paid annual leave draws the balance down; other paid types
    /// and all unpaid types leave it untouched.
    pub fn counts_against_annual_balance(&self) -> bool {
        self.is_paid && self.code == ANNUAL_LEAVE_CODE
    }
}

/// Leave types configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Map of leave type slug to leave type details.
    pub leave_types: HashMap<String, LeaveTypeConfig>,
}

/// Leave penalties configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LeavePenaltiesConfig {
    /// Map of leave type code to penalty percent for excess days.
    pub penalties: HashMap<String, Decimal>,
}

/// The complete leave configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the leave
/// configuration directory, re-keyed by leave type code for lookup.
#[derive(Debug, Clone)]
pub struct LeaveConfig {
    /// Leave types keyed by code.
    leave_types: HashMap<String, LeaveTypeConfig>,
    /// Penalty percents keyed by leave type code.
    penalties: HashMap<String, Decimal>,
}

impl LeaveConfig {
    /// Creates a new LeaveConfig from its component parts.
    pub fn new(
        leave_types: HashMap<String, LeaveTypeConfig>,
        penalties: HashMap<String, Decimal>,
    ) -> Self {
        let by_code = leave_types
            .into_values()
            .map(|leave_type| (leave_type.code.clone(), leave_type))
            .collect();
        Self {
            leave_types: by_code,
            penalties,
        }
    }

    /// Returns the leave type with the given code.
    pub fn leave_type(&self, code: &str) -> EngineResult<&LeaveTypeConfig> {
        self.leave_types
            .get(code)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                code: code.to_string(),
            })
    }

    /// Returns all leave types keyed by code.
    pub fn leave_types(&self) -> &HashMap<String, LeaveTypeConfig> {
        &self.leave_types
    }

    /// Returns the penalty percent for excess days of the given leave
    /// type, or zero when no penalty is configured.
    pub fn penalty_percent(&self, code: &str) -> Decimal {
        self.penalties.get(code).copied().unwrap_or(Decimal::ZERO)
    }
}
