//! Attendance and Payroll Engine
//!
//! This crate tracks employee daily attendance as a state machine (check-in,
//! breaks, check-out, leave) and derives monthly payroll figures from the
//! recorded attendance and approved leave history.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
