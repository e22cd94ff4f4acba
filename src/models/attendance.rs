//! Attendance record model and the daily state machine.
//!
//! This module defines the Attendance struct (one record per employee per
//! day), the AttendanceStatus enum with its guard predicates, and the four
//! transitions a day can go through: check-in, start break, end break and
//! check-out. Durations are tracked in whole minutes so the arithmetic is
//! exact; fractional-hour conversions happen at the payroll boundary.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// The standard expected start of a working day (09:00).
pub fn default_expected_start() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap()
}

/// The standard expected end of a working day (17:00).
pub fn default_expected_end() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap()
}

/// Converts a whole-minute duration to fractional hours.
///
/// # Examples
///
/// ```
/// use hrms_engine::models::minutes_to_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(minutes_to_hours(510), Decimal::from_str("8.5").unwrap());
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}

/// Formats a time of day on a 12-hour clock, e.g. "2:30 PM".
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Formats a whole-minute duration as hours and minutes, e.g. "8h 30m".
pub fn format_duration(minutes: i64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// The status of an employee's day, driving which actions are allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// No action has been taken yet today.
    #[default]
    NotStarted,
    /// The employee has checked in and is working.
    CheckedIn,
    /// The employee is on a break.
    OnBreak,
    /// The employee has checked out for the day.
    CheckedOut,
    /// The day is covered by an approved leave request.
    OnLeave,
    /// The previous day ended without a check-out; a new check-in is allowed.
    Incomplete,
}

impl AttendanceStatus {
    /// True if a check-in is allowed from this status.
    pub fn can_check_in(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::NotStarted | AttendanceStatus::Incomplete
        )
    }

    /// True if a check-out is allowed from this status.
    pub fn can_check_out(&self) -> bool {
        matches!(self, AttendanceStatus::CheckedIn | AttendanceStatus::OnBreak)
    }

    /// True if starting a break is allowed from this status.
    pub fn can_start_break(&self) -> bool {
        matches!(self, AttendanceStatus::CheckedIn)
    }

    /// True if ending a break is allowed from this status.
    pub fn can_end_break(&self) -> bool {
        matches!(self, AttendanceStatus::OnBreak)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttendanceStatus::NotStarted => "not_started",
            AttendanceStatus::CheckedIn => "checked_in",
            AttendanceStatus::OnBreak => "on_break",
            AttendanceStatus::CheckedOut => "checked_out",
            AttendanceStatus::OnLeave => "on_leave",
            AttendanceStatus::Incomplete => "incomplete",
        };
        write!(f, "{}", name)
    }
}

/// One employee's attendance record for one calendar day.
///
/// At most one record exists per (employee, date). The record starts in
/// [`AttendanceStatus::NotStarted`] and moves through the state machine via
/// [`Attendance::check_in`], [`Attendance::start_break`],
/// [`Attendance::end_break`] and [`Attendance::check_out`]. Leave approval
/// creates or overwrites records with [`AttendanceStatus::OnLeave`].
///
/// # Examples
///
/// ```
/// use hrms_engine::models::{Attendance, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
/// let mut attendance = Attendance::new("emp_001", date);
///
/// attendance.check_in(NaiveTime::from_hms_opt(9, 0, 0).unwrap()).unwrap();
/// assert_eq!(attendance.status, AttendanceStatus::CheckedIn);
/// assert!(!attendance.late_arrival);
///
/// attendance.check_out(NaiveTime::from_hms_opt(17, 0, 0).unwrap()).unwrap();
/// assert_eq!(attendance.total_minutes, Some(480));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attendance {
    /// The employee this record belongs to.
    pub employee_id: String,
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// The scheduled start of the day, baseline for lateness.
    pub expected_start: NaiveTime,
    /// The scheduled end of the day, baseline for early departure and overtime.
    pub expected_end: NaiveTime,
    /// The time the employee checked in, if they have.
    pub check_in: Option<NaiveTime>,
    /// The time the employee checked out, if they have.
    pub check_out: Option<NaiveTime>,
    /// The start of the currently open break, if one is in progress.
    pub break_start: Option<NaiveTime>,
    /// Total minutes spent on closed breaks.
    #[serde(default)]
    pub break_minutes: i64,
    /// Minutes worked, set at check-out: (check_out - check_in) - breaks.
    pub total_minutes: Option<i64>,
    /// Minutes worked beyond the scheduled day length, set at check-out.
    #[serde(default)]
    pub overtime_minutes: i64,
    /// Whether the check-in happened after the expected start.
    #[serde(default)]
    pub late_arrival: bool,
    /// Whether the check-out happened before the expected end.
    #[serde(default)]
    pub early_departure: bool,
    /// The current status of the day.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Free-text location recorded at check-in.
    pub location: Option<String>,
    /// The leave request covering this day, when status is on_leave.
    pub leave_request: Option<Uuid>,
    /// Free-text notes, e.g. the leave type for leave-covered days.
    pub notes: Option<String>,
}

impl Attendance {
    /// Creates a fresh record for the given employee and day with the
    /// standard 09:00 to 17:00 schedule and status not_started.
    pub fn new(employee_id: impl Into<String>, date: NaiveDate) -> Self {
        Attendance {
            employee_id: employee_id.into(),
            date,
            expected_start: default_expected_start(),
            expected_end: default_expected_end(),
            check_in: None,
            check_out: None,
            break_start: None,
            break_minutes: 0,
            total_minutes: None,
            overtime_minutes: 0,
            late_arrival: false,
            early_departure: false,
            status: AttendanceStatus::NotStarted,
            location: None,
            leave_request: None,
            notes: None,
        }
    }

    /// Creates a record already covered by an approved leave request.
    pub fn for_leave(
        employee_id: impl Into<String>,
        date: NaiveDate,
        request_id: Uuid,
        leave_type_name: &str,
    ) -> Self {
        let mut attendance = Attendance::new(employee_id, date);
        attendance.mark_on_leave(request_id, leave_type_name);
        attendance
    }

    /// Records a check-in, moving the day to checked_in.
    ///
    /// Allowed from not_started and incomplete. Sets the late-arrival flag
    /// when `now` is after the expected start.
    pub fn check_in(&mut self, now: NaiveTime) -> EngineResult<()> {
        if !self.status.can_check_in() {
            return Err(self.transition_error("check in"));
        }
        self.check_in = Some(now);
        self.late_arrival = now > self.expected_start;
        self.status = AttendanceStatus::CheckedIn;
        Ok(())
    }

    /// Starts a break, moving the day to on_break.
    pub fn start_break(&mut self, now: NaiveTime) -> EngineResult<()> {
        if !self.status.can_start_break() {
            return Err(self.transition_error("start break"));
        }
        self.break_start = Some(now);
        self.status = AttendanceStatus::OnBreak;
        Ok(())
    }

    /// Ends the open break, folding its span into `break_minutes` and
    /// returning the day to checked_in.
    pub fn end_break(&mut self, now: NaiveTime) -> EngineResult<()> {
        if !self.status.can_end_break() {
            return Err(self.transition_error("end break"));
        }
        self.close_break(now);
        self.status = AttendanceStatus::CheckedIn;
        Ok(())
    }

    /// Records a check-out, deriving the day's totals.
    ///
    /// Allowed from checked_in and on_break; an open break is closed at the
    /// check-out time first. Sets `total_minutes` to the exact worked span,
    /// `overtime_minutes` to the part beyond the scheduled day length, and
    /// the early-departure flag when `now` is before the expected end.
    pub fn check_out(&mut self, now: NaiveTime) -> EngineResult<()> {
        if !self.status.can_check_out() {
            return Err(self.transition_error("check out"));
        }
        let Some(start) = self.check_in else {
            return Err(self.transition_error("check out"));
        };
        if self.status == AttendanceStatus::OnBreak {
            self.close_break(now);
        }
        let worked = (now - start).num_minutes() - self.break_minutes;
        self.check_out = Some(now);
        self.total_minutes = Some(worked);
        self.overtime_minutes = (worked - self.expected_minutes()).max(0);
        self.early_departure = now < self.expected_end;
        self.status = AttendanceStatus::CheckedOut;
        Ok(())
    }

    /// Marks this day as covered by an approved leave request.
    pub fn mark_on_leave(&mut self, request_id: Uuid, leave_type_name: &str) {
        self.status = AttendanceStatus::OnLeave;
        self.leave_request = Some(request_id);
        self.notes = Some(format!("On approved leave: {}", leave_type_name));
    }

    /// Reverts a leave-covered day back to not_started, clearing the
    /// request link and notes. Used when an approved request is rejected.
    pub fn revert_leave(&mut self) {
        self.status = AttendanceStatus::NotStarted;
        self.leave_request = None;
        self.notes = None;
    }

    /// The scheduled day length in minutes.
    pub fn expected_minutes(&self) -> i64 {
        (self.expected_end - self.expected_start).num_minutes()
    }

    /// The worked time in fractional hours, if the day is complete.
    pub fn total_hours(&self) -> Option<Decimal> {
        self.total_minutes.map(minutes_to_hours)
    }

    /// The overtime portion in fractional hours.
    pub fn overtime_hours(&self) -> Decimal {
        minutes_to_hours(self.overtime_minutes)
    }

    /// True if the employee checked in on this day.
    pub fn attended(&self) -> bool {
        self.check_in.is_some()
    }

    fn close_break(&mut self, now: NaiveTime) {
        if let Some(start) = self.break_start.take() {
            self.break_minutes += (now - start).num_minutes().max(0);
        }
    }

    fn transition_error(&self, action: &str) -> EngineError {
        if self.status == AttendanceStatus::OnLeave {
            EngineError::OnApprovedLeave {
                action: action.to_string(),
                date: self.date,
            }
        } else {
            EngineError::InvalidTransition {
                action: action.to_string(),
                status: self.status.to_string(),
            }
        }
    }
}
