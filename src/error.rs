//! Error types for the Attendance and Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while tracking attendance,
//! managing leave, and computing payroll.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Attendance and Payroll Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use hrms_engine::error::EngineError;
///
/// let error = EngineError::InvalidTransition {
///     action: "check out".to_string(),
///     status: "not_started".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot check out: current status is not_started");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An attendance action was attempted from a status that does not allow it.
    #[error("Cannot {action}: current status is {status}")]
    InvalidTransition {
        /// The action that was attempted, e.g. "check in".
        action: String,
        /// The attendance status the record was in.
        status: String,
    },

    /// An attendance action was attempted on a day covered by approved leave.
    #[error("Cannot {action} on {date}: employee is on approved leave")]
    OnApprovedLeave {
        /// The action that was attempted.
        action: String,
        /// The date of the leave-covered attendance record.
        date: NaiveDate,
    },

    /// A leave request status change was not permitted by the lifecycle.
    #[error("Cannot change leave request status from {from} to {to}")]
    InvalidLeaveTransition {
        /// The status the request is currently in.
        from: String,
        /// The status the change attempted to reach.
        to: String,
    },

    /// A leave request's date range was inconsistent.
    #[error("Invalid leave dates: end date {end_date} is before start date {start_date}")]
    InvalidLeaveDates {
        /// The requested start date.
        start_date: NaiveDate,
        /// The requested end date.
        end_date: NaiveDate,
    },

    /// An approval requested more days than the employee has remaining.
    #[error("Insufficient leave balance: requested {requested} days but {remaining} remaining")]
    InsufficientLeaveBalance {
        /// The number of days the request asked for.
        requested: u32,
        /// The number of days the employee has left.
        remaining: u32,
    },

    /// The caller is not permitted to perform the operation.
    #[error("Not authorized: {message}")]
    NotAuthorized {
        /// A description of the failed permission check.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee id that was looked up.
        employee_id: String,
    },

    /// No attendance record exists for the employee on the given date.
    #[error("No attendance record for employee '{employee_id}' on {date}")]
    AttendanceNotFound {
        /// The employee id that was looked up.
        employee_id: String,
        /// The date that was looked up.
        date: NaiveDate,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {request_id}")]
    LeaveRequestNotFound {
        /// The request id that was looked up.
        request_id: Uuid,
    },

    /// No leave type is configured with the given code.
    #[error("Leave type not found: {code}")]
    LeaveTypeNotFound {
        /// The leave type code that was looked up.
        code: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
