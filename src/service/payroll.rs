//! Monthly payroll computation.
//!
//! `compute` derives a full salary breakdown for one employee and
//! month from the attendance and leave history: the effective window
//! and its working days, late/absent/incomplete day counts, the
//! overtime bonus, hire-month proration, flat attendance deductions,
//! the excess leave-day penalty, and the truncated net salary. The
//! snapshot is persisted as a [`SalaryRecord`] keyed by employee and
//! month, replacing any earlier record for that key.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::calculation::{
    LEAVE_PENALTY_THRESHOLD, OVERTIME_HOURLY_RATE, calculate_attendance_deductions,
    calculate_leave_penalty, calculate_overtime_bonus, effective_window, month_start, next_month,
    prorate_base_salary, summarize_attendance, working_days_in_window,
};
use crate::config::LeaveConfig;
use crate::error::EngineResult;
use crate::models::{Attendance, LeaveRequest, LeaveStatus, Payslip, SalaryRecord};
use crate::store::MemoryStore;

/// Salary computation over the stored attendance and leave history.
#[derive(Debug, Clone)]
pub struct PayrollService {
    store: Arc<MemoryStore>,
    config: Arc<LeaveConfig>,
}

impl PayrollService {
    /// Creates a service backed by the given store and leave policy.
    pub fn new(store: Arc<MemoryStore>, config: Arc<LeaveConfig>) -> Self {
        Self { store, config }
    }

    /// Computes the payslip for an employee and month.
    ///
    /// `month` may be any date inside the target month; `today` bounds
    /// the working days that can count as absent, so future days never
    /// penalize anyone. The whole computation runs under one store
    /// guard and ends by replacing the month's [`SalaryRecord`], which
    /// keeps concurrent recomputations serialized and the result
    /// consistent with the state it was read from.
    ///
    /// An employee without a salary on file contributes zero to every
    /// monetary line, leaving only day counts and hours in the slip.
    pub fn compute(
        &self,
        employee_id: &str,
        month: NaiveDate,
        today: NaiveDate,
    ) -> EngineResult<Payslip> {
        let mut state = self.store.write();
        let employee = state.employee(employee_id)?.clone();
        let monthly_salary = employee.salary.unwrap_or(Decimal::ZERO);

        let month_first = month_start(month);
        let month_next = next_month(month);

        // Effective window and the working days inside it.
        let (window_start, window_end) = effective_window(employee.hire_date, month);
        let working_dates = working_days_in_window(window_start, window_end, today);
        let working_days = working_dates.len() as u32;

        // Attendance totals over the window.
        let rows: Vec<Attendance> = state
            .attendance_in_range(employee_id, window_start, window_end)
            .cloned()
            .collect();
        let totals = summarize_attendance(rows.iter());

        // Approved leave overlapping the window covers days against
        // absence; requests starting in the month feed the penalty.
        let requests: Vec<LeaveRequest> = state.leave_requests_for(employee_id).cloned().collect();
        let leave_dates: BTreeSet<NaiveDate> = requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Approved && r.overlaps(window_start, window_end))
            .flat_map(|r| r.covered_dates())
            .collect();
        let absent_days = working_dates
            .iter()
            .filter(|date| !totals.attended_dates.contains(date) && !leave_dates.contains(date))
            .count() as u32;

        let approved_starting: Vec<LeaveRequest> = requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Approved && r.starts_in(month_first, month_next))
            .cloned()
            .collect();
        let rejected_leave_days: u32 = requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Rejected && r.starts_in(month_first, month_next))
            .map(|r| r.days_requested)
            .sum();

        let overtime = calculate_overtime_bonus(totals.overtime_minutes, OVERTIME_HOURLY_RATE);
        let proration = prorate_base_salary(monthly_salary, employee.hire_date, month, working_days);
        let deductions =
            calculate_attendance_deductions(totals.late_days, absent_days, totals.incomplete_days);
        let leave_penalty = calculate_leave_penalty(monthly_salary, &approved_starting, &self.config);

        let other_bonus = Decimal::ZERO;
        let gross_salary = proration.base_salary + overtime.bonus + other_bonus;
        let total_deductions = (deductions.total + leave_penalty.penalty).trunc();
        let net_salary = (gross_salary - deductions.total - leave_penalty.penalty).trunc();

        info!(
            employee_id = %employee.id,
            month = %month_first,
            working_days,
            absent_days,
            net_salary = %net_salary,
            "Payroll computed"
        );

        state.upsert_salary_record(SalaryRecord {
            record_id: Uuid::new_v4(),
            employee_id: employee.id.clone(),
            month: month_first,
            base_salary: proration.base_salary,
            bonus: overtime.bonus + other_bonus,
            deductions: total_deductions,
            total_salary: net_salary,
            total_hours_worked: totals.total_hours(),
            overtime_hours: totals.overtime_hours(),
            late_days: totals.late_days,
            absent_days,
            incomplete_days: totals.incomplete_days,
            computed_at: Utc::now(),
        });

        Ok(Payslip {
            employee_id: employee.id,
            employee_name: employee.name,
            month: month_first,
            base_salary: proration.base_salary,
            overtime_bonus: overtime.bonus,
            other_bonus,
            gross_salary,
            working_days,
            late_days: totals.late_days,
            absent_days,
            incomplete_days: totals.incomplete_days,
            late_penalty: deductions.late_penalty,
            absent_penalty: deductions.absent_penalty,
            incomplete_penalty: deductions.incomplete_penalty,
            leave_penalty: leave_penalty.penalty,
            leave_penalty_breakdown: leave_penalty.breakdown,
            approved_leave_days: leave_penalty.total_leave_days,
            rejected_leave_days,
            total_leave_days: leave_penalty.total_leave_days,
            leave_penalty_threshold: LEAVE_PENALTY_THRESHOLD,
            total_deductions,
            net_salary,
            total_hours_worked: totals.total_hours(),
            overtime_hours: totals.overtime_hours(),
        })
    }

    /// Returns the last computed salary record for an employee and
    /// month, if one exists.
    pub fn salary_record(
        &self,
        employee_id: &str,
        month: NaiveDate,
    ) -> EngineResult<Option<SalaryRecord>> {
        let state = self.store.read();
        state.employee(employee_id)?;
        Ok(state.salary_record(employee_id, month_start(month)).cloned())
    }
}
