use chrono::{DateTime, Local};

use super::state::DatePickerTarget;
use super::widgets::{
    indented_row, labeled_row, render_inline_date_picker, DatePickerAction, DayBounds,
};
use super::DateRangePickerWidget;
use crate::models::date_range::DateRange;

impl DateRangePickerWidget {
    /// Render the title and both pickers.
    ///
    /// Returns the resulting range when the user picked a day this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> Option<DateRange> {
        let today = Local::now().date_naive();
        let mut changed = None;

        ui.vertical_centered(|ui| {
            ui.heading(&self.view_state.title);
        });
        ui.add_space(8.0);

        let start_label = self.view_state.start_label.clone();
        let start = self.start_picker_date;
        self.render_toggle_row(ui, &start_label, DatePickerTarget::StartDate, start);

        if self.active_picker == Some(DatePickerTarget::StartDate) {
            let bounds = DayBounds {
                min: Some(self.config.min_selectable_date.date_naive()),
                max: Some(self.config.max_selectable_date.date_naive()),
            };
            let action = indented_inline_picker(
                ui,
                DatePickerTarget::StartDate,
                start,
                &mut self.viewing_date,
                bounds,
                today,
            );
            match action {
                DatePickerAction::Selected(day) => {
                    changed = Some(self.select_start_day(day));
                    self.active_picker = None;
                }
                DatePickerAction::Close => self.active_picker = None,
                DatePickerAction::None => {}
            }
        }

        ui.add_space(4.0);

        let end_label = self.view_state.end_label.clone();
        let end = self.end_picker.snapshot();
        self.render_toggle_row(ui, &end_label, DatePickerTarget::EndDate, end.date);

        if self.active_picker == Some(DatePickerTarget::EndDate) {
            let lower = end.minimum_date.max(self.config.min_selectable_date);
            let bounds = DayBounds {
                min: Some(lower.date_naive()),
                max: Some(self.config.max_selectable_date.date_naive()),
            };
            let action = indented_inline_picker(
                ui,
                DatePickerTarget::EndDate,
                end.date,
                &mut self.viewing_date,
                bounds,
                today,
            );
            match action {
                DatePickerAction::Selected(day) => {
                    changed = Some(self.select_end_day(day));
                    self.active_picker = None;
                }
                DatePickerAction::Close => self.active_picker = None,
                DatePickerAction::None => {}
            }
        }

        changed
    }

    fn render_toggle_row(
        &mut self,
        ui: &mut egui::Ui,
        label: &str,
        target: DatePickerTarget,
        value: DateTime<Local>,
    ) {
        labeled_row(ui, label, |ui| {
            let is_open = self.active_picker == Some(target);
            let btn_text = format!("📅 {}", value.format("%B %d, %Y"));
            if ui
                .selectable_label(is_open, btn_text)
                .on_hover_text("Click to select date")
                .clicked()
            {
                if is_open {
                    self.active_picker = None;
                } else {
                    self.active_picker = Some(target);
                    self.viewing_date = value.date_naive();
                }
            }
        });
    }
}

fn indented_inline_picker(
    ui: &mut egui::Ui,
    target: DatePickerTarget,
    current: DateTime<Local>,
    viewing_date: &mut chrono::NaiveDate,
    bounds: DayBounds,
    today: chrono::NaiveDate,
) -> DatePickerAction {
    let mut action = DatePickerAction::None;
    indented_row(ui, |ui| {
        action = render_inline_date_picker(
            ui,
            target,
            current.date_naive(),
            viewing_date,
            bounds,
            today,
        );
    });
    action
}
