use chrono::{Days, NaiveDate, NaiveTime};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use hrms_engine::models::{
    Attendance, AttendanceStatus, LeaveRequest, is_weekend, minutes_to_hours, weekdays_between,
};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn time_at(minutes_from_midnight: i64) -> NaiveTime {
    NaiveTime::from_num_seconds_from_midnight_opt(minutes_from_midnight as u32 * 60, 0).unwrap()
}

#[derive(Debug, Clone, Copy)]
enum Action {
    CheckIn,
    StartBreak,
    EndBreak,
    CheckOut,
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::CheckIn),
        Just(Action::StartBreak),
        Just(Action::EndBreak),
        Just(Action::CheckOut),
    ]
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn weekday_count_splits_at_any_boundary(
        start_offset in 0u64..365,
        split in 0u64..60,
        rest in 0u64..60,
    ) {
        let start = base_date() + Days::new(start_offset);
        let mid = start + Days::new(split);
        let end = mid + Days::new(rest);

        let whole = weekdays_between(start, end);
        let left = weekdays_between(start, mid);
        let right = weekdays_between(mid.succ_opt().unwrap(), end);
        prop_assert_eq!(whole, left + right);

        let calendar_days = (end - start).num_days() as u32 + 1;
        prop_assert!(whole <= calendar_days);
    }

    #[test]
    fn request_covers_exactly_its_weekdays(
        start_offset in 0u64..365,
        span in 0u64..30,
    ) {
        let start = base_date() + Days::new(start_offset);
        let end = start + Days::new(span);
        let request = LeaveRequest::new("emp_001", "AL", start, end, None, None).unwrap();

        let weekdays = request.covered_weekdays();
        prop_assert_eq!(weekdays.len() as u32, request.days_requested);
        prop_assert!(weekdays.iter().all(|date| !is_weekend(*date)));
        prop_assert_eq!(request.covered_dates().len() as u64, span + 1);
    }

    #[test]
    fn quarter_hour_minutes_convert_exactly(quarters in 0i64..10_000) {
        let minutes = quarters * 15;
        prop_assert_eq!(minutes_to_hours(minutes), Decimal::new(quarters * 25, 2));
    }

    #[test]
    fn worked_minutes_split_exactly_around_the_break(
        start in 360i64..600,
        pre in 0i64..120,
        brk in 0i64..120,
        post in 0i64..300,
    ) {
        let mut row = Attendance::new("emp_001", base_date());
        row.check_in(time_at(start)).unwrap();
        row.start_break(time_at(start + pre)).unwrap();
        row.end_break(time_at(start + pre + brk)).unwrap();
        row.check_out(time_at(start + pre + brk + post)).unwrap();

        // The break never counts as worked time.
        prop_assert_eq!(row.break_minutes, brk);
        prop_assert_eq!(row.total_minutes, Some(pre + post));
        prop_assert_eq!(row.overtime_minutes, (pre + post - 480).max(0));
        prop_assert_eq!(row.late_arrival, start > 540);
        prop_assert_eq!(row.early_departure, start + pre + brk + post < 1020);
    }

    #[test]
    fn arbitrary_action_sequences_keep_the_row_consistent(
        actions in proptest::collection::vec(action_strategy(), 0..12),
    ) {
        let mut row = Attendance::new("emp_001", base_date());
        let mut clock = 8 * 60;

        for action in actions {
            clock += 15;
            let time = time_at(clock);
            let before = row.clone();
            let result = match action {
                Action::CheckIn => row.check_in(time),
                Action::StartBreak => row.start_break(time),
                Action::EndBreak => row.end_break(time),
                Action::CheckOut => row.check_out(time),
            };
            // A rejected transition must leave the row untouched.
            if result.is_err() {
                prop_assert_eq!(&row, &before);
            }
        }

        prop_assert!(row.break_minutes >= 0);
        match row.status {
            AttendanceStatus::NotStarted => prop_assert!(row.check_in.is_none()),
            AttendanceStatus::CheckedIn => prop_assert!(row.check_in.is_some()),
            AttendanceStatus::OnBreak => prop_assert!(row.break_start.is_some()),
            AttendanceStatus::CheckedOut => {
                prop_assert!(row.check_out.is_some());
                prop_assert!(row.break_start.is_none());
                prop_assert!(row.total_minutes.unwrap() >= 0);
                prop_assert!(row.overtime_minutes >= 0);
            }
            AttendanceStatus::OnLeave | AttendanceStatus::Incomplete => {}
        }
    }
}
