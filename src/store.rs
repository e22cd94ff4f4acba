//! In-memory persistence for engine state.
//!
//! All engine state lives in a single [`StoreState`] behind one
//! [`RwLock`]. Every service operation takes exactly one guard for its
//! whole body, so each operation observes and produces a consistent
//! snapshot; two writers never interleave partial updates.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{Attendance, Employee, LeaveRequest, SalaryRecord};

/// The tables that make up engine state.
///
/// Attendance rows are keyed by `(employee_id, date)` and salary
/// records by `(employee_id, month)`, so each employee has at most one
/// row per day and one record per month.
#[derive(Debug, Default)]
pub struct StoreState {
    employees: BTreeMap<String, Employee>,
    attendance: BTreeMap<(String, NaiveDate), Attendance>,
    leave_requests: BTreeMap<Uuid, LeaveRequest>,
    salary_records: BTreeMap<(String, NaiveDate), SalaryRecord>,
}

impl StoreState {
    /// Returns the employee with the given id.
    pub fn employee(&self, employee_id: &str) -> EngineResult<&Employee> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Returns the employee with the given id for mutation.
    pub fn employee_mut(&mut self, employee_id: &str) -> EngineResult<&mut Employee> {
        self.employees
            .get_mut(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                employee_id: employee_id.to_string(),
            })
    }

    /// Inserts or replaces an employee.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Returns the attendance row for an employee on a date, if any.
    pub fn attendance(&self, employee_id: &str, date: NaiveDate) -> Option<&Attendance> {
        self.attendance.get(&(employee_id.to_string(), date))
    }

    /// Returns the attendance row for an employee on a date for
    /// mutation, if any.
    pub fn attendance_mut(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
    ) -> Option<&mut Attendance> {
        self.attendance.get_mut(&(employee_id.to_string(), date))
    }

    /// Inserts or replaces the attendance row for the row's own
    /// employee and date.
    pub fn upsert_attendance(&mut self, row: Attendance) {
        self.attendance
            .insert((row.employee_id.clone(), row.date), row);
    }

    /// Returns an employee's attendance rows with `start <= date < end`,
    /// in date order.
    pub fn attendance_in_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Attendance> {
        self.attendance
            .range((employee_id.to_string(), start)..(employee_id.to_string(), end))
            .map(|(_, row)| row)
    }

    /// Returns the leave request with the given id.
    pub fn leave_request(&self, request_id: Uuid) -> EngineResult<&LeaveRequest> {
        self.leave_requests
            .get(&request_id)
            .ok_or(EngineError::LeaveRequestNotFound { request_id })
    }

    /// Returns the leave request with the given id for mutation.
    pub fn leave_request_mut(&mut self, request_id: Uuid) -> EngineResult<&mut LeaveRequest> {
        self.leave_requests
            .get_mut(&request_id)
            .ok_or(EngineError::LeaveRequestNotFound { request_id })
    }

    /// Inserts or replaces a leave request under its own id.
    pub fn insert_leave_request(&mut self, request: LeaveRequest) {
        self.leave_requests.insert(request.id, request);
    }

    /// Returns all leave requests filed by an employee.
    pub fn leave_requests_for(&self, employee_id: &str) -> impl Iterator<Item = &LeaveRequest> {
        self.leave_requests
            .values()
            .filter(move |request| request.employee_id == employee_id)
    }

    /// Returns the attendance rows linked to a leave request for
    /// mutation.
    pub fn rows_linked_to_request(
        &mut self,
        request_id: Uuid,
    ) -> impl Iterator<Item = &mut Attendance> {
        self.attendance
            .values_mut()
            .filter(move |row| row.leave_request == Some(request_id))
    }

    /// Inserts or replaces the salary record for the record's own
    /// employee and month.
    pub fn upsert_salary_record(&mut self, record: SalaryRecord) {
        self.salary_records
            .insert((record.employee_id.clone(), record.month), record);
    }

    /// Returns the last computed salary record for an employee and
    /// month, if any.
    pub fn salary_record(&self, employee_id: &str, month: NaiveDate) -> Option<&SalaryRecord> {
        self.salary_records.get(&(employee_id.to_string(), month))
    }
}

/// Thread-safe owner of the engine state.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hrms_engine::models::{Employee, Role};
/// use hrms_engine::store::MemoryStore;
///
/// let store = MemoryStore::new();
///
/// let hired = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// store.write().insert_employee(Employee::new(
///     "EMP-001",
///     "Ada Lovelace",
///     Role::Employee,
///     "Engineering",
///     hired,
/// ));
///
/// let state = store.read();
/// assert_eq!(state.employee("EMP-001").unwrap().name, "Ada Lovelace");
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the state for reading.
    ///
    /// A panic in an earlier guard holder poisons the lock; the data
    /// itself is still consistent, so the guard is recovered.
    pub fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the state for writing.
    ///
    /// Service operations hold one write guard for their whole body,
    /// which is what makes each operation transactional.
    pub fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
