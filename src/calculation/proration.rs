//! First-month salary proration.
//!
//! An employee hired partway through a month is paid a daily rate for
//! the working days between the hire date and the end of the month,
//! rather than the full monthly salary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::working_days::{month_start, next_month};

/// The divisor used to derive a daily rate from a monthly salary.
pub const STANDARD_MONTH_DAYS: Decimal = Decimal::from_parts(28, 0, 0, false, 0);

/// The result of applying first-month proration to a base salary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProrationResult {
    /// The base salary after proration, or the full monthly salary
    /// when no proration applies.
    pub base_salary: Decimal,
    /// Whether the salary was prorated for a mid-month hire.
    pub prorated: bool,
}

/// Prorates the monthly salary when the employee was hired inside the
/// payroll month.
///
/// Proration applies only when the hire date falls strictly between
/// the first day of the month and the first day of the next month.
/// The prorated amount is `(monthly_salary / 28) * working_days`,
/// where `working_days` counts the weekdays actually in the effective
/// window.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use hrms_engine::calculation::prorate_base_salary;
/// use rust_decimal::Decimal;
///
/// let salary = Decimal::new(2_800_000, 0);
/// let hired = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
/// let month = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
///
/// let result = prorate_base_salary(salary, hired, month, 5);
/// assert!(result.prorated);
/// assert_eq!(result.base_salary, Decimal::new(500_000, 0));
/// ```
pub fn prorate_base_salary(
    monthly_salary: Decimal,
    hire_date: NaiveDate,
    month: NaiveDate,
    working_days: u32,
) -> ProrationResult {
    let start = month_start(month);
    let end = next_month(month);

    if hire_date > start && hire_date < end {
        let daily_rate = monthly_salary / STANDARD_MONTH_DAYS;
        ProrationResult {
            base_salary: daily_rate * Decimal::from(working_days),
            prorated: true,
        }
    } else {
        ProrationResult {
            base_salary: monthly_salary,
            prorated: false,
        }
    }
}
