//! Daily attendance operations.
//!
//! Each operation takes one store guard for its whole body, checks the
//! row's state machine, and persists the updated row only when the
//! transition succeeds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, format_duration, format_time_12h};
use crate::store::MemoryStore;

/// The outcome of a successful check-in.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInResult {
    /// The recorded check-in time.
    pub time: NaiveTime,
    /// The check-in time in 12-hour display form, e.g. "9:00 AM".
    pub time_display: String,
    /// Whether the check-in came after the expected start.
    pub is_late: bool,
    /// The attendance row as persisted.
    pub attendance: Attendance,
}

/// The outcome of a successful check-out.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutResult {
    /// The recorded check-out time.
    pub time: NaiveTime,
    /// The check-out time in 12-hour display form.
    pub time_display: String,
    /// Net hours worked, breaks excluded.
    pub total_hours: Decimal,
    /// Worked time in display form, e.g. "8h 30m".
    pub total_hours_display: String,
    /// Hours worked beyond the scheduled day length.
    pub overtime_hours: Decimal,
    /// Whether the check-out came before the expected end.
    pub is_early_departure: bool,
    /// The attendance row as persisted.
    pub attendance: Attendance,
}

/// Today's attendance picture for an employee.
///
/// `attendance` is the stored row when one exists, otherwise a
/// synthetic not-started placeholder that is never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct DayStatus {
    /// The stored or synthetic attendance row.
    pub attendance: Attendance,
    /// Whether a check-in would currently succeed.
    pub can_check_in: bool,
    /// Whether a check-out would currently succeed.
    pub can_check_out: bool,
    /// Whether starting a break would currently succeed.
    pub can_start_break: bool,
    /// Whether ending a break would currently succeed.
    pub can_end_break: bool,
    /// The time the status was taken at.
    pub current_time: NaiveTime,
}

/// Check-in, check-out and break tracking against the store.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime};
/// use hrms_engine::models::{Employee, Role};
/// use hrms_engine::service::AttendanceService;
/// use hrms_engine::store::MemoryStore;
/// use std::sync::Arc;
///
/// let store = Arc::new(MemoryStore::new());
/// store.write().insert_employee(Employee::new(
///     "EMP-001",
///     "Ada Lovelace",
///     Role::Employee,
///     "Engineering",
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// ));
///
/// let service = AttendanceService::new(store);
/// let morning = NaiveDateTime::parse_from_str("2025-08-04 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let evening = NaiveDateTime::parse_from_str("2025-08-04 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let checked_in = service.check_in("EMP-001", morning, None).unwrap();
/// assert!(!checked_in.is_late);
///
/// let checked_out = service.check_out("EMP-001", evening).unwrap();
/// assert_eq!(checked_out.total_hours_display, "8h 0m");
/// ```
#[derive(Debug, Clone)]
pub struct AttendanceService {
    store: Arc<MemoryStore>,
}

impl AttendanceService {
    /// Creates a service backed by the given store.
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }

    /// Records a check-in for the day of `now`.
    ///
    /// Creates the day's attendance row when none exists. Fails when
    /// the employee is unknown, on approved leave for the day, or the
    /// row has already moved past `not_started`/`incomplete`.
    pub fn check_in(
        &self,
        employee_id: &str,
        now: NaiveDateTime,
        location: Option<&str>,
    ) -> EngineResult<CheckInResult> {
        let mut state = self.store.write();
        state.employee(employee_id)?;

        let date = now.date();
        let time = now.time();
        let mut row = match state.attendance(employee_id, date) {
            Some(existing) => existing.clone(),
            None => Attendance::new(employee_id, date),
        };

        row.check_in(time)?;
        if let Some(location) = location {
            row.location = Some(location.to_string());
        }

        let is_late = row.late_arrival;
        info!(
            employee_id = %employee_id,
            date = %date,
            is_late,
            "Employee checked in"
        );

        state.upsert_attendance(row.clone());
        Ok(CheckInResult {
            time,
            time_display: format_time_12h(time),
            is_late,
            attendance: row,
        })
    }

    /// Records a check-out for the day of `now`.
    ///
    /// An open break is closed at the check-out time. Fails when no
    /// check-in exists for the day or the row is already checked out.
    pub fn check_out(&self, employee_id: &str, now: NaiveDateTime) -> EngineResult<CheckOutResult> {
        let mut state = self.store.write();
        state.employee(employee_id)?;

        let date = now.date();
        let time = now.time();
        // A day with no row behaves as not started, so the transition
        // check produces the usual status error.
        let mut row = match state.attendance(employee_id, date) {
            Some(existing) => existing.clone(),
            None => Attendance::new(employee_id, date),
        };

        row.check_out(time)?;

        let total_hours = row.total_hours().unwrap_or(Decimal::ZERO);
        let total_minutes = row.total_minutes.unwrap_or(0);
        info!(
            employee_id = %employee_id,
            date = %date,
            total_minutes,
            overtime_minutes = row.overtime_minutes,
            "Employee checked out"
        );

        state.upsert_attendance(row.clone());
        Ok(CheckOutResult {
            time,
            time_display: format_time_12h(time),
            total_hours,
            total_hours_display: format_duration(total_minutes),
            overtime_hours: row.overtime_hours(),
            is_early_departure: row.early_departure,
            attendance: row,
        })
    }

    /// Starts a break on the day of `now`.
    ///
    /// Unlike check-in, a break against a day with no attendance row is
    /// a not-found error rather than a transition error; there is
    /// nothing to take a break from.
    pub fn start_break(&self, employee_id: &str, now: NaiveDateTime) -> EngineResult<Attendance> {
        let mut state = self.store.write();
        state.employee(employee_id)?;

        let date = now.date();
        let row = state.attendance_mut(employee_id, date).ok_or_else(|| {
            EngineError::AttendanceNotFound {
                employee_id: employee_id.to_string(),
                date,
            }
        })?;

        row.start_break(now.time())?;
        info!(employee_id = %employee_id, date = %date, "Break started");
        Ok(row.clone())
    }

    /// Ends the current break on the day of `now`, accumulating its
    /// length into the row's break minutes.
    pub fn end_break(&self, employee_id: &str, now: NaiveDateTime) -> EngineResult<Attendance> {
        let mut state = self.store.write();
        state.employee(employee_id)?;

        let date = now.date();
        let row = state.attendance_mut(employee_id, date).ok_or_else(|| {
            EngineError::AttendanceNotFound {
                employee_id: employee_id.to_string(),
                date,
            }
        })?;

        row.end_break(now.time())?;
        info!(
            employee_id = %employee_id,
            date = %date,
            break_minutes = row.break_minutes,
            "Break ended"
        );
        Ok(row.clone())
    }

    /// Returns the employee's attendance picture for the day of `now`.
    ///
    /// When no row exists a synthetic not-started placeholder is
    /// returned without being persisted.
    pub fn current_status(&self, employee_id: &str, now: NaiveDateTime) -> EngineResult<DayStatus> {
        let state = self.store.read();
        state.employee(employee_id)?;

        let date = now.date();
        let attendance = state
            .attendance(employee_id, date)
            .cloned()
            .unwrap_or_else(|| Attendance::new(employee_id, date));

        let status = attendance.status;
        Ok(DayStatus {
            can_check_in: status.can_check_in(),
            can_check_out: status.can_check_out(),
            can_start_break: status.can_start_break(),
            can_end_break: status.can_end_break(),
            current_time: now.time(),
            attendance,
        })
    }

    /// Returns the stored attendance row for a given day, if any.
    pub fn attendance_on(
        &self,
        employee_id: &str,
        date: NaiveDate,
    ) -> EngineResult<Option<Attendance>> {
        let state = self.store.read();
        state.employee(employee_id)?;
        Ok(state.attendance(employee_id, date).cloned())
    }
}
