//! Service layer of the Attendance and Payroll Engine.
//!
//! The services own the operation contracts the surrounding
//! application calls: daily attendance actions, leave request
//! decisions, and monthly payroll computation. Each operation runs
//! against the shared [`crate::store::MemoryStore`] under a single
//! guard, so every operation is an atomic transaction over engine
//! state.

mod attendance;
mod leave;
mod payroll;

pub use attendance::{AttendanceService, CheckInResult, CheckOutResult, DayStatus};
pub use leave::LeaveService;
pub use payroll::PayrollService;
