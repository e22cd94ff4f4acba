//! Leave request model and lifecycle.
//!
//! This module defines the LeaveRequest struct, the LeaveStatus enum with
//! its transition table, and the weekday counting used for leave day
//! totals. A request starts pending and is decided exactly once; the only
//! later change allowed is revoking an approval by rejecting it.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// The leave-type code that draws down the annual leave balance.
pub const ANNUAL_LEAVE_CODE: &str = "AL";

/// True for Saturdays and Sundays.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the weekdays between two dates, endpoints inclusive.
///
/// This is the canonical day count: it sizes leave requests, the
/// attendance rows created on approval, and the working days of a payroll
/// month. A range that ends before it starts counts zero.
///
/// # Examples
///
/// ```
/// use hrms_engine::models::weekdays_between;
/// use chrono::NaiveDate;
///
/// // Monday through Friday
/// let monday = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap();
/// assert_eq!(weekdays_between(monday, friday), 5);
///
/// // Thursday through the following Monday spans a weekend
/// let thursday = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
/// let next_monday = NaiveDate::from_ymd_opt(2025, 8, 11).unwrap();
/// assert_eq!(weekdays_between(thursday, next_monday), 3);
/// ```
pub fn weekdays_between(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    start
        .iter_days()
        .take_while(|date| *date <= end)
        .filter(|date| !is_weekend(*date))
        .count() as u32
}

/// The lifecycle status of a leave request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Submitted and awaiting a decision.
    #[default]
    Pending,
    /// Approved by a manager; attendance rows are in place.
    Approved,
    /// Rejected, either directly or by revoking an approval.
    Rejected,
    /// Withdrawn by the requester before a decision.
    Cancelled,
}

impl LeaveStatus {
    /// True if the lifecycle permits moving from this status to `next`.
    ///
    /// A pending request can be approved, rejected or cancelled. An
    /// approved request can only be rejected (revocation). Rejected and
    /// cancelled are final.
    pub fn can_transition_to(&self, next: LeaveStatus) -> bool {
        matches!(
            (*self, next),
            (LeaveStatus::Pending, LeaveStatus::Approved)
                | (LeaveStatus::Pending, LeaveStatus::Rejected)
                | (LeaveStatus::Pending, LeaveStatus::Cancelled)
                | (LeaveStatus::Approved, LeaveStatus::Rejected)
        )
    }
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
            LeaveStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", name)
    }
}

/// A request for a contiguous range of leave days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: Uuid,
    /// The employee asking for leave.
    pub employee_id: String,
    /// The code of the requested leave type, e.g. "AL".
    pub leave_type: String,
    /// First day of the requested range.
    pub start_date: NaiveDate,
    /// Last day of the requested range, inclusive.
    pub end_date: NaiveDate,
    /// The number of leave days this request counts as.
    pub days_requested: u32,
    /// Free-text reason supplied by the requester.
    pub reason: Option<String>,
    /// Where the request is in its lifecycle.
    #[serde(default)]
    pub status: LeaveStatus,
    /// The manager who decided the request, once decided.
    pub approved_by: Option<String>,
    /// The date the decision was made, once decided.
    pub response_date: Option<NaiveDate>,
}

impl LeaveRequest {
    /// Creates a pending request with a fresh id.
    ///
    /// Fails when the end date is before the start date. When
    /// `days_requested` is `None`, the weekday count of the range is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use hrms_engine::models::{LeaveRequest, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let request = LeaveRequest::new(
    ///     "emp_001",
    ///     "AL",
    ///     NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(),
    ///     NaiveDate::from_ymd_opt(2025, 8, 22).unwrap(),
    ///     None,
    ///     Some("family trip".to_string()),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(request.status, LeaveStatus::Pending);
    /// assert_eq!(request.days_requested, 5);
    /// ```
    pub fn new(
        employee_id: impl Into<String>,
        leave_type: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        days_requested: Option<u32>,
        reason: Option<String>,
    ) -> EngineResult<Self> {
        if end_date < start_date {
            return Err(EngineError::InvalidLeaveDates {
                start_date,
                end_date,
            });
        }
        Ok(LeaveRequest {
            id: Uuid::new_v4(),
            employee_id: employee_id.into(),
            leave_type: leave_type.into(),
            start_date,
            end_date,
            days_requested: days_requested
                .unwrap_or_else(|| weekdays_between(start_date, end_date)),
            reason,
            status: LeaveStatus::Pending,
            approved_by: None,
            response_date: None,
        })
    }

    /// The weekdays this request covers, in date order.
    pub fn covered_weekdays(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
            .filter(|date| !is_weekend(*date))
            .collect()
    }

    /// Every calendar date this request covers, in date order.
    pub fn covered_dates(&self) -> Vec<NaiveDate> {
        self.start_date
            .iter_days()
            .take_while(|date| *date <= self.end_date)
            .collect()
    }

    /// True if the request's range overlaps [`start`, `end_exclusive`).
    pub fn overlaps(&self, start: NaiveDate, end_exclusive: NaiveDate) -> bool {
        self.start_date < end_exclusive && self.end_date >= start
    }

    /// True if the request starts within [`start`, `end_exclusive`).
    pub fn starts_in(&self, start: NaiveDate, end_exclusive: NaiveDate) -> bool {
        self.start_date >= start && self.start_date < end_exclusive
    }
}
