//! Overtime bonus calculation.
//!
//! Hours worked beyond the scheduled day length accumulate as overtime
//! minutes on each attendance record; this module converts a window's
//! accumulated overtime into the monthly bonus amount.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::minutes_to_hours;

/// The bonus paid per overtime hour.
pub const OVERTIME_HOURLY_RATE: Decimal = Decimal::from_parts(50_000, 0, 0, false, 0);

/// The result of pricing a window's overtime minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeBonusResult {
    /// The overtime expressed in fractional hours.
    pub overtime_hours: Decimal,
    /// The bonus: overtime hours times the hourly rate.
    pub bonus: Decimal,
}

/// Converts accumulated overtime minutes into the overtime bonus.
///
/// # Arguments
///
/// * `overtime_minutes` - Overtime minutes summed over the window
/// * `hourly_rate` - The bonus per overtime hour (typically
///   [`OVERTIME_HOURLY_RATE`])
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::{OVERTIME_HOURLY_RATE, calculate_overtime_bonus};
/// use rust_decimal::Decimal;
///
/// let result = calculate_overtime_bonus(30, OVERTIME_HOURLY_RATE);
/// assert_eq!(result.overtime_hours, Decimal::new(5, 1)); // 0.5
/// assert_eq!(result.bonus, Decimal::new(25_000, 0));
/// ```
pub fn calculate_overtime_bonus(overtime_minutes: i64, hourly_rate: Decimal) -> OvertimeBonusResult {
    let overtime_hours = minutes_to_hours(overtime_minutes);
    OvertimeBonusResult {
        overtime_hours,
        bonus: overtime_hours * hourly_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// OB-001: half an hour of overtime pays half the hourly rate
    #[test]
    fn test_ob_001_half_hour_overtime() {
        let result = calculate_overtime_bonus(30, OVERTIME_HOURLY_RATE);
        assert_eq!(result.overtime_hours, dec("0.5"));
        assert_eq!(result.bonus, dec("25000"));
    }

    /// OB-002: no overtime pays nothing
    #[test]
    fn test_ob_002_zero_overtime() {
        let result = calculate_overtime_bonus(0, OVERTIME_HOURLY_RATE);
        assert_eq!(result.overtime_hours, Decimal::ZERO);
        assert_eq!(result.bonus, Decimal::ZERO);
    }

    /// OB-003: a month of daily overtime accumulates linearly
    #[test]
    fn test_ob_003_accumulated_overtime() {
        // 20 working days with 90 minutes over schedule each
        let result = calculate_overtime_bonus(20 * 90, OVERTIME_HOURLY_RATE);
        assert_eq!(result.overtime_hours, dec("30"));
        assert_eq!(result.bonus, dec("1500000"));
    }

    /// OB-004: a custom rate flows straight through
    #[test]
    fn test_ob_004_custom_rate() {
        let result = calculate_overtime_bonus(60, dec("72000"));
        assert_eq!(result.bonus, dec("72000"));
    }

    #[test]
    fn test_result_serialization() {
        let result = OvertimeBonusResult {
            overtime_hours: dec("1.5"),
            bonus: dec("75000"),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"overtime_hours\":\"1.5\""));
        assert!(json.contains("\"bonus\":\"75000\""));
    }
}
