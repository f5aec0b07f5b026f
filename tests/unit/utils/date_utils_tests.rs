// Parameterized tests for the date helpers used by the pickers

use chrono::NaiveDate;
use date_range_picker::utils::date::{is_day_selectable, shift_month};
use test_case::test_case;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case(ymd(2025, 1, 31), 1, ymd(2025, 2, 28) ; "clamps to shorter month")]
#[test_case(ymd(2025, 12, 15), 1, ymd(2026, 1, 15) ; "crosses year forward")]
#[test_case(ymd(2025, 1, 15), -1, ymd(2024, 12, 15) ; "crosses year backward")]
#[test_case(ymd(2024, 2, 29), 12, ymd(2025, 2, 28) ; "leap day a year on")]
#[test_case(ymd(2024, 3, 31), -1, ymd(2024, 2, 29) ; "clamps to leap february")]
#[test_case(ymd(2025, 4, 30), 0, ymd(2025, 4, 30) ; "zero delta")]
fn test_shift_month(date: NaiveDate, delta: i32, expected: NaiveDate) {
    assert_eq!(shift_month(date, delta), expected);
}

#[test_case(ymd(2025, 5, 10), None, None => true ; "unbounded")]
#[test_case(ymd(2025, 5, 10), Some(ymd(2025, 5, 10)), None => true ; "min is inclusive")]
#[test_case(ymd(2025, 5, 9), Some(ymd(2025, 5, 10)), None => false ; "before min")]
#[test_case(ymd(2025, 5, 10), None, Some(ymd(2025, 5, 10)) => true ; "max is inclusive")]
#[test_case(ymd(2025, 5, 11), None, Some(ymd(2025, 5, 10)) => false ; "after max")]
fn test_is_day_selectable(day: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    is_day_selectable(day, min, max)
}
