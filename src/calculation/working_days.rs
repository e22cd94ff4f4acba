//! Working day determination for payroll months.
//!
//! This module provides the window arithmetic of the payroll calculator:
//! normalizing a month, finding the effective window for an employee (which
//! starts at the hire date for employees hired during the month), and
//! listing the weekdays that count as working days.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::is_weekend;

/// Normalizes any date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The first day of the following month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    month_start(date) + Months::new(1)
}

/// The payroll window for an employee and month.
///
/// The window starts at the hire date when the employee was hired during
/// the month, otherwise at the month's first day. It always ends at the
/// next month's first day, exclusive.
///
/// # Examples
///
/// ```
/// use hrms_engine::calculation::effective_window;
/// use chrono::NaiveDate;
///
/// let hired_mid_month = NaiveDate::from_ymd_opt(2025, 8, 25).unwrap();
/// let month = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
///
/// let (start, end) = effective_window(hired_mid_month, month);
/// assert_eq!(start, hired_mid_month);
/// assert_eq!(end, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
/// ```
pub fn effective_window(hire_date: NaiveDate, month: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = month_start(month);
    let end = next_month(month);
    if hire_date > start && hire_date < end {
        (hire_date, end)
    } else {
        (start, end)
    }
}

/// Lists the weekdays of [`start`, `end_exclusive`) that fall on or before
/// `today`, in date order. These are the days an employee was expected to
/// work so far.
pub fn working_days_in_window(
    start: NaiveDate,
    end_exclusive: NaiveDate,
    today: NaiveDate,
) -> Vec<NaiveDate> {
    start
        .iter_days()
        .take_while(|date| *date < end_exclusive)
        .filter(|date| !is_weekend(*date) && *date <= today)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// WD-001: August 2025 has 21 weekdays once the month has passed
    #[test]
    fn test_wd_001_full_month_weekday_count() {
        let days = working_days_in_window(date(2025, 8, 1), date(2025, 9, 1), date(2025, 9, 15));
        assert_eq!(days.len(), 21);
        assert_eq!(days.first(), Some(&date(2025, 8, 1)));
        assert_eq!(days.last(), Some(&date(2025, 8, 29)));
    }

    /// WD-002: mid-month, only weekdays up to today count
    #[test]
    fn test_wd_002_counts_stop_at_today() {
        let days = working_days_in_window(date(2025, 8, 1), date(2025, 9, 1), date(2025, 8, 13));
        assert_eq!(days.len(), 9);
        assert_eq!(days.last(), Some(&date(2025, 8, 13)));
    }

    /// WD-003: a today before the window yields no working days
    #[test]
    fn test_wd_003_today_before_window() {
        let days = working_days_in_window(date(2025, 8, 1), date(2025, 9, 1), date(2025, 7, 20));
        assert!(days.is_empty());
    }

    /// WD-004: hire during the month moves the window start
    #[test]
    fn test_wd_004_window_starts_at_hire_date() {
        let (start, end) = effective_window(date(2025, 8, 25), date(2025, 8, 1));
        assert_eq!(start, date(2025, 8, 25));
        assert_eq!(end, date(2025, 9, 1));

        let days = working_days_in_window(start, end, date(2025, 9, 15));
        assert_eq!(days.len(), 5); // Mon 25th through Fri 29th
    }

    /// WD-005: hire before the month leaves the window at the full month
    #[test]
    fn test_wd_005_window_full_month_for_earlier_hire() {
        let (start, end) = effective_window(date(2024, 1, 10), date(2025, 8, 15));
        assert_eq!(start, date(2025, 8, 1));
        assert_eq!(end, date(2025, 9, 1));
    }

    /// WD-006: hire on the first of the month is not a mid-month hire
    #[test]
    fn test_wd_006_hire_on_first_is_full_month() {
        let (start, _) = effective_window(date(2025, 8, 1), date(2025, 8, 1));
        assert_eq!(start, date(2025, 8, 1));
    }

    #[test]
    fn test_month_start_normalizes_any_day() {
        assert_eq!(month_start(date(2025, 8, 22)), date(2025, 8, 1));
        assert_eq!(month_start(date(2025, 8, 1)), date(2025, 8, 1));
    }

    #[test]
    fn test_next_month_rolls_over_december() {
        assert_eq!(next_month(date(2025, 12, 15)), date(2026, 1, 1));
        assert_eq!(next_month(date(2025, 8, 1)), date(2025, 9, 1));
    }
}
