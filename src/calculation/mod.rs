//! Calculation logic for the Attendance and Payroll Engine.
//!
//! This module contains all the calculation functions for deriving a
//! monthly salary from attendance history, including working-day
//! enumeration for the effective payroll window, attendance totals
//! (late days, incomplete days, worked and overtime minutes), overtime
//! bonus pricing, first-month salary proration, flat per-day attendance
//! deductions, and the excess leave-day penalty.

mod attendance_deductions;
mod attendance_totals;
mod leave_penalty;
mod overtime_bonus;
mod proration;
mod working_days;

pub use attendance_deductions::{
    ABSENT_PENALTY_PER_DAY, AttendanceDeductions, INCOMPLETE_PENALTY_PER_DAY, LATE_PENALTY_PER_DAY,
    calculate_attendance_deductions,
};
pub use attendance_totals::{AttendanceTotals, summarize_attendance};
pub use leave_penalty::{LEAVE_PENALTY_THRESHOLD, LeavePenaltyResult, calculate_leave_penalty};
pub use overtime_bonus::{OVERTIME_HOURLY_RATE, OvertimeBonusResult, calculate_overtime_bonus};
pub use proration::{ProrationResult, STANDARD_MONTH_DAYS, prorate_base_salary};
pub use working_days::{effective_window, month_start, next_month, working_days_in_window};
