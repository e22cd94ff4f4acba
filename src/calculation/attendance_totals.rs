//! Monthly attendance aggregation.
//!
//! This module scans an employee's attendance rows for a payroll window
//! and accumulates the facts the calculator needs: late days, attended
//! dates, incomplete days, and the worked and overtime minute totals.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Attendance, AttendanceStatus, minutes_to_hours};

/// Aggregated attendance facts for one employee's payroll window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceTotals {
    /// Days where the check-in was after the row's expected start.
    pub late_days: u32,
    /// Days whose status is incomplete.
    pub incomplete_days: u32,
    /// Dates with a recorded check-in.
    pub attended_dates: BTreeSet<NaiveDate>,
    /// Minutes worked across completed days.
    pub total_minutes: i64,
    /// Overtime minutes across completed days.
    pub overtime_minutes: i64,
}

impl AttendanceTotals {
    /// The worked total in fractional hours.
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_minutes)
    }

    /// The overtime total in fractional hours.
    pub fn overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.overtime_minutes)
    }
}

/// Scans attendance rows into the totals the payroll calculator consumes.
///
/// A row counts as late when its check-in is after its own expected start,
/// and as attended when it has any check-in. Worked and overtime minutes
/// come from the values derived at check-out.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::summarize_attendance;
/// use hrms_engine::models::Attendance;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
/// let mut day = Attendance::new("emp_001", date);
/// day.check_in(NaiveTime::from_hms_opt(9, 30, 0).unwrap()).unwrap();
/// day.check_out(NaiveTime::from_hms_opt(17, 0, 0).unwrap()).unwrap();
///
/// let totals = summarize_attendance([&day]);
/// assert_eq!(totals.late_days, 1);
/// assert_eq!(totals.total_minutes, 450);
/// assert!(totals.attended_dates.contains(&date));
/// ```
pub fn summarize_attendance<'a, I>(rows: I) -> AttendanceTotals
where
    I: IntoIterator<Item = &'a Attendance>,
{
    let mut totals = AttendanceTotals::default();
    for row in rows {
        if let Some(check_in) = row.check_in {
            totals.attended_dates.insert(row.date);
            if check_in > row.expected_start {
                totals.late_days += 1;
            }
        }
        if row.status == AttendanceStatus::Incomplete {
            totals.incomplete_days += 1;
        }
        if let Some(minutes) = row.total_minutes {
            totals.total_minutes += minutes;
        }
        totals.overtime_minutes += row.overtime_minutes;
    }
    totals
}
