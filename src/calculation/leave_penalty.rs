//! Excess leave-day penalty calculation.
//!
//! Employees may take a fixed number of approved leave days per month
//! without affecting pay. Days beyond that threshold are charged a
//! per-day penalty, each day priced at a configurable percent of the
//! daily salary rate for its leave type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::LeaveConfig;
use crate::models::{LeavePenaltyLine, LeaveRequest};

use super::proration::STANDARD_MONTH_DAYS;

/// Approved leave days per month before the per-day penalty applies.
pub const LEAVE_PENALTY_THRESHOLD: u32 = 4;

/// The result of pricing a month's excess leave days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeavePenaltyResult {
    /// Total approved leave days starting in the month.
    pub total_leave_days: u32,
    /// Days beyond the threshold that were penalized.
    pub penalized_days: u32,
    /// The total penalty amount.
    pub penalty: Decimal,
    /// Per-request penalty lines, in the order the days were consumed.
    pub breakdown: Vec<LeavePenaltyLine>,
}

impl LeavePenaltyResult {
    fn free(total_leave_days: u32) -> Self {
        Self {
            total_leave_days,
            penalized_days: 0,
            penalty: Decimal::ZERO,
            breakdown: Vec::new(),
        }
    }
}

/// Calculates the penalty for approved leave days beyond the monthly
/// threshold.
///
/// The caller supplies the approved requests starting in the payroll
/// month. Their `days_requested` values are summed; when the sum
/// exceeds [`LEAVE_PENALTY_THRESHOLD`], the excess is consumed against
/// the requests in a stable order (start date, then request id), each
/// consumed day adding `(monthly_salary / 28) * (penalty_percent / 100)`
/// for the request's leave type. Leave types without a configured
/// penalty contribute zero-amount lines.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hrms_engine::calculation::calculate_leave_penalty;
/// use hrms_engine::config::{LeaveConfig, LeaveTypeConfig};
/// use hrms_engine::models::LeaveRequest;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut types = HashMap::new();
/// types.insert(
///     "annual".to_string(),
///     LeaveTypeConfig {
///         name: "Annual Leave".to_string(),
///         code: "AL".to_string(),
///         max_days_per_year: 12,
///         is_paid: true,
///     },
/// );
/// let mut penalties = HashMap::new();
/// penalties.insert("AL".to_string(), Decimal::new(50, 0));
/// let config = LeaveConfig::new(types, penalties);
///
/// // Six approved leave days against a four-day threshold.
/// let request = LeaveRequest::new(
///     "EMP-001",
///     "AL",
///     NaiveDate::from_ymd_opt(2025, 8, 18).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 8, 25).unwrap(),
///     None,
///     None,
/// )
/// .unwrap();
///
/// let result = calculate_leave_penalty(Decimal::new(2_800_000, 0), &[request], &config);
/// assert_eq!(result.penalized_days, 2);
/// assert_eq!(result.penalty, Decimal::new(100_000, 0));
/// ```
pub fn calculate_leave_penalty(
    monthly_salary: Decimal,
    approved_requests: &[LeaveRequest],
    config: &LeaveConfig,
) -> LeavePenaltyResult {
    let total_leave_days: u32 = approved_requests.iter().map(|r| r.days_requested).sum();

    if total_leave_days <= LEAVE_PENALTY_THRESHOLD {
        return LeavePenaltyResult::free(total_leave_days);
    }

    let mut ordered: Vec<&LeaveRequest> = approved_requests.iter().collect();
    ordered.sort_by_key(|r| (r.start_date, r.id));

    let daily_rate = monthly_salary / STANDARD_MONTH_DAYS;
    let penalized_days = total_leave_days - LEAVE_PENALTY_THRESHOLD;

    let mut remaining = penalized_days;
    let mut penalty = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for request in ordered {
        if remaining == 0 {
            break;
        }
        let days = request.days_requested.min(remaining);
        if days == 0 {
            continue;
        }

        let percent = config.penalty_percent(&request.leave_type);
        let name = config
            .leave_type(&request.leave_type)
            .map(|t| t.name.clone())
            .unwrap_or_else(|_| request.leave_type.clone());

        let amount = daily_rate * (percent / Decimal::ONE_HUNDRED) * Decimal::from(days);
        penalty += amount;
        breakdown.push(LeavePenaltyLine {
            leave_type: name,
            days,
            penalty_percent: percent,
            penalty_amount: amount,
        });
        remaining -= days;
    }

    LeavePenaltyResult {
        total_leave_days,
        penalized_days,
        penalty,
        breakdown,
    }
}
