//! Salary record and payslip models.
//!
//! This module defines the stored monthly payroll snapshot
//! ([`SalaryRecord`]) and the full breakdown returned to callers
//! ([`Payslip`]), including the per-request leave penalty lines.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line of the leave penalty breakdown, attributed to one request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavePenaltyLine {
    /// Display name of the leave type the penalised request used.
    pub leave_type: String,
    /// How many of this request's days were penalised.
    pub days: u32,
    /// The penalty percentage applied to each penalised day.
    pub penalty_percent: Decimal,
    /// The amount this line adds to the leave penalty.
    pub penalty_amount: Decimal,
}

/// The stored payroll snapshot for one employee and one month.
///
/// Keyed by (employee, month first day); recomputing a month replaces the
/// record wholesale, so it is always the output of the last computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Unique identifier of this computation.
    pub record_id: Uuid,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// First day of the month the record covers.
    pub month: NaiveDate,
    /// The base salary actually paid, after any hire-month proration.
    pub base_salary: Decimal,
    /// Total bonus: overtime bonus plus any other bonus.
    pub bonus: Decimal,
    /// Total deductions: attendance penalties plus the leave penalty.
    pub deductions: Decimal,
    /// Net salary, truncated to a whole amount.
    pub total_salary: Decimal,
    /// Hours worked across the month's completed days.
    pub total_hours_worked: Decimal,
    /// Overtime hours accumulated across the month.
    pub overtime_hours: Decimal,
    /// Days the employee checked in after the expected start.
    pub late_days: u32,
    /// Working days with no attendance and no leave cover.
    pub absent_days: u32,
    /// Days that ended without a check-out.
    pub incomplete_days: u32,
    /// When this record was computed.
    pub computed_at: DateTime<Utc>,
}

/// The full payroll breakdown for one employee and month.
///
/// Everything a payslip shows: the pay components, the day counts they
/// were derived from, each penalty amount, and the leave penalty
/// breakdown. Amounts are exact decimals except `net_salary` and
/// `total_deductions`, which are truncated to whole amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// The employee the payslip is for.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// First day of the month the payslip covers.
    pub month: NaiveDate,
    /// The base salary after any hire-month proration.
    pub base_salary: Decimal,
    /// Bonus for hours worked beyond the scheduled day length.
    pub overtime_bonus: Decimal,
    /// Bonus not attributable to overtime.
    pub other_bonus: Decimal,
    /// Base salary plus all bonuses.
    pub gross_salary: Decimal,
    /// Weekdays in the effective window, up to today.
    pub working_days: u32,
    /// Days checked in after the expected start.
    pub late_days: u32,
    /// Working days with no attendance and no leave cover.
    pub absent_days: u32,
    /// Days that ended without a check-out.
    pub incomplete_days: u32,
    /// Deduction for late days.
    pub late_penalty: Decimal,
    /// Deduction for absent days.
    pub absent_penalty: Decimal,
    /// Deduction for incomplete days.
    pub incomplete_penalty: Decimal,
    /// Deduction for approved leave beyond the monthly threshold.
    pub leave_penalty: Decimal,
    /// How the leave penalty splits across penalised requests.
    pub leave_penalty_breakdown: Vec<LeavePenaltyLine>,
    /// Total days of approved requests starting in the month.
    pub approved_leave_days: u32,
    /// Total days of rejected requests starting in the month.
    pub rejected_leave_days: u32,
    /// The leave day total measured against the threshold.
    pub total_leave_days: u32,
    /// Approved leave days per month that carry no penalty.
    pub leave_penalty_threshold: u32,
    /// All deductions combined, truncated to a whole amount.
    pub total_deductions: Decimal,
    /// What the employee takes home, truncated to a whole amount.
    pub net_salary: Decimal,
    /// Hours worked across the month's completed days.
    pub total_hours_worked: Decimal,
    /// Overtime hours accumulated across the month.
    pub overtime_hours: Decimal,
}
