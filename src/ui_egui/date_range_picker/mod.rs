//! Linked start/end date pickers for egui.
//!
//! The widget is a thin host around [`RangeConsistencyController`]: it turns
//! day clicks into picker events, keeps picks inside the configured bounds and
//! renders whatever the controller decided.

mod render;
mod state;
mod widgets;

pub use state::{DatePickerTarget, EndPickerState, SharedEndPicker};

use chrono::{DateTime, Local, NaiveDate};

use crate::models::date_range::DateRange;
use crate::models::picker_config::{PickerConfig, ViewState};
use crate::services::range::RangeConsistencyController;
use crate::utils::date::{clamp_to_bounds, with_date};

pub struct DateRangePickerWidget {
    view_state: ViewState,
    config: PickerConfig,
    controller: RangeConsistencyController,
    start_picker_date: DateTime<Local>,
    end_picker: SharedEndPicker,
    active_picker: Option<DatePickerTarget>,
    viewing_date: NaiveDate,
}

impl DateRangePickerWidget {
    pub fn new(view_state: ViewState, now: DateTime<Local>) -> Self {
        let config = view_state.picker_config(now).bounded();
        let end_picker = SharedEndPicker::new(EndPickerState {
            minimum_date: now,
            date: now,
        });

        let mut controller = RangeConsistencyController::with_now(now);
        controller.attach_end_control(Box::new(end_picker.clone()));
        controller.initialize(&config);

        Self {
            view_state,
            config,
            start_picker_date: controller.selected_start(),
            controller,
            end_picker,
            active_picker: None,
            viewing_date: now.date_naive(),
        }
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn controller(&self) -> &RangeConsistencyController {
        &self.controller
    }

    /// Mutable access, mainly for registering observers
    pub fn controller_mut(&mut self) -> &mut RangeConsistencyController {
        &mut self.controller
    }

    pub fn end_picker(&self) -> EndPickerState {
        self.end_picker.snapshot()
    }

    pub fn start_picker_date(&self) -> DateTime<Local> {
        self.start_picker_date
    }

    /// Apply a day picked on the start calendar
    pub fn select_start_day(&mut self, day: NaiveDate) -> DateRange {
        let picked = self.config.clamp(with_date(self.start_picker_date, day));
        self.start_picker_date = picked;
        self.controller.on_start_date_changed(picked)
    }

    /// Apply a day picked on the end calendar
    pub fn select_end_day(&mut self, day: NaiveDate) -> DateRange {
        let end = self.end_picker.snapshot();
        let lower = end.minimum_date.max(self.config.min_selectable_date);
        let picked = clamp_to_bounds(
            with_date(end.date, day),
            lower,
            self.config.max_selectable_date,
        );
        self.end_picker.show_date(picked);
        self.controller.on_end_date_changed(picked)
    }
}
