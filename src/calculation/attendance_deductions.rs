//! Attendance-based salary deductions.
//!
//! Late arrivals, full-day absences and incomplete records each carry
//! a flat per-day penalty that is subtracted from the monthly salary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The penalty for each day the employee checked in late.
pub const LATE_PENALTY_PER_DAY: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// The penalty for each working day with no attendance and no leave.
pub const ABSENT_PENALTY_PER_DAY: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// The penalty for each day closed out without a check-out.
pub const INCOMPLETE_PENALTY_PER_DAY: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// The itemized attendance deductions for a payroll month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDeductions {
    /// Total penalty for late arrivals.
    pub late_penalty: Decimal,
    /// Total penalty for unexcused absences.
    pub absent_penalty: Decimal,
    /// Total penalty for incomplete attendance records.
    pub incomplete_penalty: Decimal,
    /// Sum of the three penalties.
    pub total: Decimal,
}

/// Prices the month's attendance lapses at the flat per-day rates.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::calculate_attendance_deductions;
/// use rust_decimal::Decimal;
///
/// let deductions = calculate_attendance_deductions(2, 1, 1);
/// assert_eq!(deductions.late_penalty, Decimal::new(200_000, 0));
/// assert_eq!(deductions.absent_penalty, Decimal::new(100_000, 0));
/// assert_eq!(deductions.incomplete_penalty, Decimal::new(50_000, 0));
/// assert_eq!(deductions.total, Decimal::new(350_000, 0));
/// ```
pub fn calculate_attendance_deductions(
    late_days: u32,
    absent_days: u32,
    incomplete_days: u32,
) -> AttendanceDeductions {
    let late_penalty = LATE_PENALTY_PER_DAY * Decimal::from(late_days);
    let absent_penalty = ABSENT_PENALTY_PER_DAY * Decimal::from(absent_days);
    let incomplete_penalty = INCOMPLETE_PENALTY_PER_DAY * Decimal::from(incomplete_days);

    AttendanceDeductions {
        late_penalty,
        absent_penalty,
        incomplete_penalty,
        total: late_penalty + absent_penalty + incomplete_penalty,
    }
}
