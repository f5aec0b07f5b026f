// Date utility functions
// Bounds, month arithmetic and date-only re-dating used by the pickers

use chrono::{DateTime, Duration, Local, Months, NaiveDate, TimeZone};

/// How far ahead the pickers allow selection when nothing else is configured
pub const DEFAULT_MONTHS_AHEAD: u32 = 6;

/// Add calendar months, clamping the day to the end of the target month.
///
/// Falls back to the input when the result is out of chrono's range.
pub fn add_months(date: DateTime<Local>, months: u32) -> DateTime<Local> {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}

/// Default upper selection bound: six calendar months after `now`
pub fn default_max_selectable(now: DateTime<Local>) -> DateTime<Local> {
    add_months(now, DEFAULT_MONTHS_AHEAD)
}

/// Shift a date by whole months, clamping the day to the end of the target month
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    };
    shifted.unwrap_or(date)
}

/// Move `current` onto `date`, keeping its time of day.
///
/// A date-mode picker only changes the calendar day. When that time of day
/// falls in a DST gap on the new day, the first valid instant after the gap
/// is used, then the start of the day.
pub fn with_date(current: DateTime<Local>, date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_time(current.time());
    Local
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .or_else(|| {
            date.and_hms_opt(0, 0, 0)
                .and_then(|midnight| Local.from_local_datetime(&midnight).earliest())
        })
        .unwrap_or(current)
}

/// Clamp a date into `[min, max]`. Inverted bounds collapse to `min`.
pub fn clamp_to_bounds(
    date: DateTime<Local>,
    min: DateTime<Local>,
    max: DateTime<Local>,
) -> DateTime<Local> {
    if date < min || max < min {
        min
    } else if date > max {
        max
    } else {
        date
    }
}

/// Whether a calendar day can be picked given optional day-level bounds
pub fn is_day_selectable(day: NaiveDate, min: Option<NaiveDate>, max: Option<NaiveDate>) -> bool {
    min.map_or(true, |min| day >= min) && max.map_or(true, |max| day <= max)
}
