// Range service module
// Keeps the start/end selection consistent and notifies observers

mod controller;

pub use controller::RangeConsistencyController;

use chrono::{DateTime, Local};

use crate::models::date_range::DateRange;

/// Persistent observer of every user-driven range change.
///
/// The controller holds delegates weakly, so the owner decides how long
/// one stays registered.
pub trait DateRangePickerDelegate {
    fn did_change_dates(&self, range: DateRange);
}

/// Commands the controller issues to the host's end-date picker
#[cfg_attr(test, mockall::automock)]
pub trait EndDateControl {
    /// Earliest date the end picker may offer
    fn set_minimum_date(&mut self, date: DateTime<Local>);

    /// Value the end picker should display
    fn set_date(&mut self, date: DateTime<Local>);
}
