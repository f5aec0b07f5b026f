use std::rc::{Rc, Weak};

use chrono::{DateTime, Local};

use super::{DateRangePickerDelegate, EndDateControl};
use crate::models::date_range::DateRange;
use crate::models::picker_config::PickerConfig;

type Completion = Box<dyn FnMut(DateRange)>;

/// Owns the selected start and end dates and enforces `end >= start`.
///
/// All mutation happens synchronously from the two picker handlers (and
/// [`initialize`](Self::initialize)), so there is no locking and the type is
/// deliberately `!Send`.
pub struct RangeConsistencyController {
    selected_start: DateTime<Local>,
    selected_end: DateTime<Local>,
    end_minimum_date: DateTime<Local>,
    delegate: Option<Weak<dyn DateRangePickerDelegate>>,
    completion: Option<Completion>,
    end_control: Option<Box<dyn EndDateControl>>,
}

impl RangeConsistencyController {
    /// Create a controller with both dates set to the current time
    pub fn new() -> Self {
        Self::with_now(Local::now())
    }

    /// Create a controller with both dates set to `now`
    pub fn with_now(now: DateTime<Local>) -> Self {
        Self {
            selected_start: now,
            selected_end: now,
            end_minimum_date: now,
            delegate: None,
            completion: None,
            end_control: None,
        }
    }

    /// Apply the configuration once, before any user interaction.
    ///
    /// A preselected range seeds both dates without notifying anyone. An
    /// inverted preselected range is clamped so the invariant holds from the
    /// start.
    pub fn initialize(&mut self, config: &PickerConfig) {
        match config.preselected_range {
            Some(range) => {
                self.selected_start = range.start;
                self.selected_end = range.end.max(range.start);
                self.end_minimum_date = self.selected_start;
                log::info!(
                    "Date range seeded with {} .. {}",
                    self.selected_start,
                    self.selected_end
                );
                if let Some(control) = self.end_control.as_mut() {
                    control.set_minimum_date(self.selected_start);
                    control.set_date(self.selected_end);
                }
            }
            None => {
                self.end_minimum_date = config.min_selectable_date;
                if let Some(control) = self.end_control.as_mut() {
                    control.set_minimum_date(config.min_selectable_date);
                }
            }
        }
    }

    /// Handle a new value from the start picker.
    ///
    /// The end picker's lower bound follows the start date; an end date left
    /// behind is pulled up to the start. Only the delegate is notified.
    pub fn on_start_date_changed(&mut self, new_start: DateTime<Local>) -> DateRange {
        self.selected_start = new_start;
        self.end_minimum_date = new_start;
        if let Some(control) = self.end_control.as_mut() {
            control.set_minimum_date(new_start);
        }

        if self.selected_end < self.selected_start {
            log::debug!(
                "End date {} precedes new start {}, clamping",
                self.selected_end,
                self.selected_start
            );
            self.selected_end = self.selected_start;
            if let Some(control) = self.end_control.as_mut() {
                control.set_date(self.selected_start);
            }
        }

        let range = self.range();
        self.notify_delegate(range);
        range
    }

    /// Handle a new value from the end picker.
    ///
    /// An end date before the start is reset to the start and the picker is
    /// told to show the corrected value. Notifies the completion callback,
    /// then the delegate.
    pub fn on_end_date_changed(&mut self, new_end: DateTime<Local>) -> DateRange {
        self.selected_end = new_end;

        if self.selected_end < self.selected_start {
            log::debug!(
                "End date {} precedes start {}, clamping",
                self.selected_end,
                self.selected_start
            );
            self.selected_end = self.selected_start;
            if let Some(control) = self.end_control.as_mut() {
                control.set_date(self.selected_start);
            }
        }

        let range = self.range();
        if let Some(completion) = self.completion.as_mut() {
            completion(range);
        }
        self.notify_delegate(range);
        range
    }

    /// Register the delegate without taking ownership of it
    pub fn set_delegate<D: DateRangePickerDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak: Weak<D> = Rc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// Register the callback invoked on end-date changes
    pub fn set_completion(&mut self, completion: impl FnMut(DateRange) + 'static) {
        self.completion = Some(Box::new(completion));
    }

    pub fn clear_completion(&mut self) {
        self.completion = None;
    }

    /// Attach the host's end-date picker
    pub fn attach_end_control(&mut self, control: Box<dyn EndDateControl>) {
        self.end_control = Some(control);
    }

    pub fn selected_start(&self) -> DateTime<Local> {
        self.selected_start
    }

    pub fn selected_end(&self) -> DateTime<Local> {
        self.selected_end
    }

    /// Live lower bound of the end picker
    pub fn end_minimum_date(&self) -> DateTime<Local> {
        self.end_minimum_date
    }

    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.selected_start,
            end: self.selected_end,
        }
    }

    fn notify_delegate(&mut self, range: DateRange) {
        let Some(weak) = self.delegate.as_ref() else {
            return;
        };
        match weak.upgrade() {
            Some(delegate) => delegate.did_change_dates(range),
            None => {
                log::debug!("Date range delegate was dropped, unregistering");
                self.delegate = None;
            }
        }
    }
}

impl Default for RangeConsistencyController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RangeConsistencyController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeConsistencyController")
            .field("selected_start", &self.selected_start)
            .field("selected_end", &self.selected_end)
            .field("end_minimum_date", &self.end_minimum_date)
            .field("has_delegate", &self.delegate.is_some())
            .field("has_completion", &self.completion.is_some())
            .field("has_end_control", &self.end_control.is_some())
            .finish()
    }
}
