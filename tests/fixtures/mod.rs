// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use std::cell::RefCell;

use chrono::{DateTime, Duration, Local, TimeZone};
use date_range_picker::models::date_range::DateRange;
use date_range_picker::services::range::DateRangePickerDelegate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Fixed reference instant, mid-month and away from DST changes
    pub fn t0() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    /// `t0` shifted by whole days
    pub fn t0_plus_days(days: i64) -> DateTime<Local> {
        t0() + Duration::days(days)
    }
}

/// Delegate that records every notification
#[derive(Default)]
pub struct RecordingDelegate {
    pub ranges: RefCell<Vec<DateRange>>,
}

impl RecordingDelegate {
    pub fn count(&self) -> usize {
        self.ranges.borrow().len()
    }

    pub fn last(&self) -> Option<DateRange> {
        self.ranges.borrow().last().copied()
    }
}

impl DateRangePickerDelegate for RecordingDelegate {
    fn did_change_dates(&self, range: DateRange) {
        self.ranges.borrow_mut().push(range);
    }
}
