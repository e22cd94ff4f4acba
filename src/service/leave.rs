//! Leave request lifecycle operations.
//!
//! Requests move from `pending` to `approved`, `rejected` or
//! `cancelled`; an approval can later be revoked by rejecting it.
//! Approval and revocation cascade onto the covered attendance rows,
//! all inside one store guard per operation.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::LeaveConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, AttendanceStatus, LeaveRequest, LeaveStatus};
use crate::store::MemoryStore;

/// Submission, decision and cancellation of leave requests.
#[derive(Debug, Clone)]
pub struct LeaveService {
    store: Arc<MemoryStore>,
    config: Arc<LeaveConfig>,
}

impl LeaveService {
    /// Creates a service backed by the given store and leave policy.
    pub fn new(store: Arc<MemoryStore>, config: Arc<LeaveConfig>) -> Self {
        Self { store, config }
    }

    /// Files a new pending leave request.
    ///
    /// The leave type must exist in the policy. When `days_requested`
    /// is `None`, the weekday count of the range is used. Fails when
    /// the end date is before the start date.
    pub fn submit(
        &self,
        employee_id: &str,
        leave_type: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        days_requested: Option<u32>,
        reason: Option<String>,
    ) -> EngineResult<LeaveRequest> {
        let mut state = self.store.write();
        state.employee(employee_id)?;
        self.config.leave_type(leave_type)?;

        let request = LeaveRequest::new(
            employee_id,
            leave_type,
            start_date,
            end_date,
            days_requested,
            reason,
        )?;

        info!(
            request_id = %request.id,
            employee_id = %employee_id,
            leave_type = %leave_type,
            days = request.days_requested,
            "Leave request submitted"
        );

        state.insert_leave_request(request.clone());
        Ok(request)
    }

    /// Approves a pending request.
    ///
    /// The approver must be a manager and the employee's remaining
    /// annual leave balance must cover the requested days, whatever the
    /// leave type. Paid annual leave then draws the balance down, and
    /// every covered weekday gains an `on_leave` attendance row; days
    /// already worked are left untouched.
    ///
    /// The balance is re-read under the write guard, so two concurrent
    /// approvals cannot both pass the check against a stale value.
    pub fn approve(
        &self,
        request_id: Uuid,
        approver_id: &str,
        today: NaiveDate,
    ) -> EngineResult<LeaveRequest> {
        let mut state = self.store.write();

        let request = state.leave_request(request_id)?.clone();
        if !request.status.can_transition_to(LeaveStatus::Approved) {
            return Err(EngineError::InvalidLeaveTransition {
                from: request.status.to_string(),
                to: LeaveStatus::Approved.to_string(),
            });
        }

        if !state.employee(approver_id)?.is_manager() {
            warn!(
                request_id = %request_id,
                approver_id = %approver_id,
                "Approval attempted by non-manager"
            );
            return Err(EngineError::NotAuthorized {
                message: "only managers may approve or reject leave requests".to_string(),
            });
        }

        let remaining = state.employee(&request.employee_id)?.annual_leave_remaining;
        if request.days_requested > remaining {
            return Err(EngineError::InsufficientLeaveBalance {
                requested: request.days_requested,
                remaining,
            });
        }

        let leave_type = self.config.leave_type(&request.leave_type)?.clone();
        if leave_type.counts_against_annual_balance() {
            state.employee_mut(&request.employee_id)?.annual_leave_remaining -=
                request.days_requested;
        }

        {
            let stored = state.leave_request_mut(request_id)?;
            stored.status = LeaveStatus::Approved;
            stored.approved_by = Some(approver_id.to_string());
            stored.response_date = Some(today);
        }

        // Cascade onto the covered weekdays. Worked days keep their
        // attendance; only absent or incomplete days become leave.
        for date in request.covered_weekdays() {
            let replace = match state.attendance(&request.employee_id, date) {
                None => true,
                Some(row) => matches!(
                    row.status,
                    AttendanceStatus::NotStarted | AttendanceStatus::Incomplete
                ),
            };
            if replace {
                state.upsert_attendance(Attendance::for_leave(
                    &request.employee_id,
                    date,
                    request_id,
                    &leave_type.name,
                ));
            }
        }

        info!(
            request_id = %request_id,
            employee_id = %request.employee_id,
            days = request.days_requested,
            "Leave request approved"
        );

        Ok(state.leave_request(request_id)?.clone())
    }

    /// Rejects a pending request, or revokes an approved one.
    ///
    /// Revocation resets the covered `on_leave` attendance rows back to
    /// `not_started`. A balance already drawn by the approval is not
    /// refunded.
    pub fn reject(
        &self,
        request_id: Uuid,
        approver_id: &str,
        today: NaiveDate,
    ) -> EngineResult<LeaveRequest> {
        let mut state = self.store.write();

        let request = state.leave_request(request_id)?.clone();
        if !request.status.can_transition_to(LeaveStatus::Rejected) {
            return Err(EngineError::InvalidLeaveTransition {
                from: request.status.to_string(),
                to: LeaveStatus::Rejected.to_string(),
            });
        }

        if !state.employee(approver_id)?.is_manager() {
            warn!(
                request_id = %request_id,
                approver_id = %approver_id,
                "Rejection attempted by non-manager"
            );
            return Err(EngineError::NotAuthorized {
                message: "only managers may approve or reject leave requests".to_string(),
            });
        }

        let was_approved = request.status == LeaveStatus::Approved;
        if was_approved {
            for row in state.rows_linked_to_request(request_id) {
                if row.status == AttendanceStatus::OnLeave {
                    row.revert_leave();
                }
            }
        }

        {
            let stored = state.leave_request_mut(request_id)?;
            stored.status = LeaveStatus::Rejected;
            stored.approved_by = Some(approver_id.to_string());
            stored.response_date = Some(today);
        }

        info!(
            request_id = %request_id,
            employee_id = %request.employee_id,
            was_approved,
            "Leave request rejected"
        );

        Ok(state.leave_request(request_id)?.clone())
    }

    /// Cancels a request that is still pending.
    ///
    /// Only the original requester may cancel, and only before a
    /// decision is made.
    pub fn cancel(&self, request_id: Uuid, requester_id: &str) -> EngineResult<LeaveRequest> {
        let mut state = self.store.write();

        let request = state.leave_request(request_id)?.clone();
        if !request.status.can_transition_to(LeaveStatus::Cancelled) {
            return Err(EngineError::InvalidLeaveTransition {
                from: request.status.to_string(),
                to: LeaveStatus::Cancelled.to_string(),
            });
        }

        if request.employee_id != requester_id {
            return Err(EngineError::NotAuthorized {
                message: "only the requesting employee may cancel a leave request".to_string(),
            });
        }

        let stored = state.leave_request_mut(request_id)?;
        stored.status = LeaveStatus::Cancelled;

        info!(
            request_id = %request_id,
            employee_id = %request.employee_id,
            "Leave request cancelled"
        );

        Ok(stored.clone())
    }

    /// Returns a leave request by id.
    pub fn request(&self, request_id: Uuid) -> EngineResult<LeaveRequest> {
        Ok(self.store.read().leave_request(request_id)?.clone())
    }

    /// Returns an employee's leave requests, ordered by start date.
    pub fn requests_for(&self, employee_id: &str) -> EngineResult<Vec<LeaveRequest>> {
        let state = self.store.read();
        state.employee(employee_id)?;

        let mut requests: Vec<LeaveRequest> =
            state.leave_requests_for(employee_id).cloned().collect();
        requests.sort_by_key(|request| (request.start_date, request.id));
        Ok(requests)
    }
}
