//! Employee model and related types.
//!
//! This module defines the Employee struct and Role enum for the workers
//! whose attendance and payroll the engine tracks. Employee records are
//! owned by an external system; the engine stores the fields it needs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The number of annual leave days a new employee starts with.
pub const DEFAULT_ANNUAL_LEAVE_DAYS: u32 = 12;

/// Represents an employee's role within the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A manager, permitted to approve and reject leave requests.
    Manager,
    /// A regular employee.
    Employee,
}

/// Represents an employee whose attendance and payroll are tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name, used on payslips.
    pub name: String,
    /// The employee's role within the organisation.
    pub role: Role,
    /// The department the employee belongs to.
    pub department: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The monthly base salary. `None` means not yet configured; payroll
    /// treats a missing salary as zero.
    pub salary: Option<Decimal>,
    /// The number of annual leave days the employee has left this year.
    pub annual_leave_remaining: u32,
}

impl Employee {
    /// Creates an employee with no salary configured and the default
    /// annual leave balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrms_engine::models::{Employee, Role};
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee::new(
    ///     "emp_001",
    ///     "Aisha Rahman",
    ///     Role::Employee,
    ///     "Engineering",
    ///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    /// );
    /// assert_eq!(employee.annual_leave_remaining, 12);
    /// assert!(employee.salary.is_none());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        department: impl Into<String>,
        hire_date: NaiveDate,
    ) -> Self {
        Employee {
            id: id.into(),
            name: name.into(),
            role,
            department: department.into(),
            hire_date,
            salary: None,
            annual_leave_remaining: DEFAULT_ANNUAL_LEAVE_DAYS,
        }
    }

    /// Returns true if the employee holds the manager role.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrms_engine::models::{Employee, Role};
    /// use chrono::NaiveDate;
    ///
    /// let manager = Employee::new(
    ///     "mgr_001",
    ///     "Devi Kusuma",
    ///     Role::Manager,
    ///     "Engineering",
    ///     NaiveDate::from_ymd_opt(2020, 7, 15).unwrap(),
    /// );
    /// assert!(manager.is_manager());
    /// ```
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}
