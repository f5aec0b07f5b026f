// Picker configuration module
// Read-only bounds for the controller and the view state rendered by hosts

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::date_range::DateRange;
use crate::utils::date::{clamp_to_bounds, default_max_selectable};

/// Selection bounds and an optional initial range.
///
/// The controller only reads this; hosts use the bounds to constrain what
/// their pickers offer.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    pub min_selectable_date: DateTime<Local>,
    pub max_selectable_date: DateTime<Local>,
    pub preselected_range: Option<DateRange>,
}

impl PickerConfig {
    /// Default bounds anchored at `now`: `[now, now + 6 months]`
    pub fn anchored_at(now: DateTime<Local>) -> Self {
        Self {
            min_selectable_date: now,
            max_selectable_date: default_max_selectable(now),
            preselected_range: None,
        }
    }

    pub fn with_preselected_range(mut self, range: DateRange) -> Self {
        self.preselected_range = Some(range);
        self
    }

    pub fn with_max_selectable_date(mut self, max: DateTime<Local>) -> Self {
        self.max_selectable_date = max;
        self
    }

    /// Clamp a date into the selectable bounds
    pub fn clamp(&self, date: DateTime<Local>) -> DateTime<Local> {
        clamp_to_bounds(date, self.min_selectable_date, self.max_selectable_date)
    }

    /// Pull the preselected range inside the selectable bounds.
    ///
    /// Ranges read from settings are not checked against the bounds they
    /// are shown with, so a seed may start after the last selectable date.
    pub fn bounded(mut self) -> Self {
        if let Some(range) = self.preselected_range {
            self.preselected_range = Some(DateRange::new(
                self.clamp(range.start),
                self.clamp(range.end),
            ));
        }
        self
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self::anchored_at(Local::now())
    }
}

/// Everything a host needs to render the widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    pub title: String,
    pub start_label: String,
    pub end_label: String,
    pub max_selectable_date: DateTime<Local>,
    pub preselected_range: Option<DateRange>,
}

impl ViewState {
    /// Derive the controller configuration; the lower bound is always `now`
    pub fn picker_config(&self, now: DateTime<Local>) -> PickerConfig {
        let config =
            PickerConfig::anchored_at(now).with_max_selectable_date(self.max_selectable_date);
        match self.preselected_range {
            Some(range) => config.with_preselected_range(range),
            None => config,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            title: "Select dates".to_string(),
            start_label: "Start date".to_string(),
            end_label: "End date".to_string(),
            max_selectable_date: default_max_selectable(Local::now()),
            preselected_range: None,
        }
    }
}
