//! Core data models for the Attendance and Payroll Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod salary_record;

pub use attendance::{
    Attendance, AttendanceStatus, default_expected_end, default_expected_start, format_duration,
    format_time_12h, minutes_to_hours,
};
pub use employee::{DEFAULT_ANNUAL_LEAVE_DAYS, Employee, Role};
pub use leave::{
    ANNUAL_LEAVE_CODE, LeaveRequest, LeaveStatus, is_weekend, weekdays_between,
};
pub use salary_record::{LeavePenaltyLine, Payslip, SalaryRecord};
