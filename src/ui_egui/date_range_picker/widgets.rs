use chrono::{Datelike, NaiveDate};

use super::state::DatePickerTarget;
use crate::utils::date::{is_day_selectable, shift_month};

const FORM_LABEL_WIDTH: f32 = 90.0;

/// Result from the inline date picker
pub enum DatePickerAction {
    /// No action taken
    None,
    /// User selected a date
    Selected(NaiveDate),
    /// User wants to close the picker without selecting
    Close,
}

/// Day-level bounds for one inline calendar
#[derive(Clone, Copy, Debug, Default)]
pub struct DayBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DayBounds {
    pub fn allows(&self, day: NaiveDate) -> bool {
        is_day_selectable(day, self.min, self.max)
    }
}

pub fn labeled_row<F>(ui: &mut egui::Ui, label: &str, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        ui.allocate_ui_with_layout(
            egui::Vec2::new(FORM_LABEL_WIDTH, 24.0),
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                ui.label(label);
            },
        );
        add_contents(ui);
    });
}

pub fn indented_row<F>(ui: &mut egui::Ui, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        ui.add_space(FORM_LABEL_WIDTH);
        add_contents(ui);
    });
}

/// Render an inline calendar-style date picker
///
/// # Arguments
/// * `ui` - The egui UI context
/// * `target` - Which date field this picker is for (start/end)
/// * `current_date` - The currently selected date for this field
/// * `viewing_date` - The month/year currently being viewed
/// * `bounds` - Days outside these bounds are shown disabled
/// * `today` - Today's date for highlighting
///
/// Returns the action to take (None, Selected date, or Close)
pub fn render_inline_date_picker(
    ui: &mut egui::Ui,
    target: DatePickerTarget,
    current_date: NaiveDate,
    viewing_date: &mut NaiveDate,
    bounds: DayBounds,
    today: NaiveDate,
) -> DatePickerAction {
    let mut action = DatePickerAction::None;

    let id_suffix = match target {
        DatePickerTarget::StartDate => "start",
        DatePickerTarget::EndDate => "end",
    };

    ui.vertical(|ui| {
        ui.set_max_width(220.0);

        // Month/Year header with navigation
        ui.horizontal(|ui| {
            if ui.small_button("◀").on_hover_text("Previous month").clicked() {
                *viewing_date = shift_month(*viewing_date, -1);
            }

            let header = format!("{}", viewing_date.format("%b %Y"));
            ui.add_space(4.0);
            if ui
                .selectable_label(false, &header)
                .on_hover_text("Go to today")
                .clicked()
            {
                *viewing_date = today;
            }
            ui.add_space(4.0);

            if ui.small_button("▶").on_hover_text("Next month").clicked() {
                *viewing_date = shift_month(*viewing_date, 1);
            }
        });

        ui.separator();

        let day_names = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

        egui::Grid::new(format!("range_picker_grid_{}", id_suffix))
            .num_columns(7)
            .spacing([2.0, 2.0])
            .min_col_width(22.0)
            .show(ui, |ui| {
                for name in &day_names {
                    ui.label(egui::RichText::new(*name).small().strong());
                }
                ui.end_row();

                let Some(first_of_month) = viewing_date.with_day(1) else {
                    return;
                };
                let start_weekday = first_of_month.weekday().num_days_from_sunday() as i64;

                // Start from the Sunday before the first of the month
                let mut current = first_of_month - chrono::Duration::days(start_weekday);
                for _week in 0..6 {
                    for _day in 0..7 {
                        let is_current_month = current.month() == viewing_date.month();
                        let is_selected = current == current_date;
                        let is_disabled = !bounds.allows(current);

                        let day_str = format!("{}", current.day());
                        let text = if current == today {
                            egui::RichText::new(&day_str)
                                .strong()
                                .color(egui::Color32::from_rgb(50, 150, 50))
                        } else if is_disabled {
                            egui::RichText::new(&day_str).weak().strikethrough()
                        } else if !is_current_month {
                            egui::RichText::new(&day_str).weak()
                        } else {
                            egui::RichText::new(&day_str)
                        };

                        let response = ui.add_enabled(
                            !is_disabled,
                            egui::SelectableLabel::new(is_selected, text),
                        );
                        if response.clicked() {
                            action = DatePickerAction::Selected(current);
                        }

                        current += chrono::Duration::days(1);
                    }
                    ui.end_row();

                    // Stop if we've gone past this month
                    if current.month() != viewing_date.month() && current.day() > 7 {
                        break;
                    }
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Today").clicked() {
                if bounds.allows(today) {
                    action = DatePickerAction::Selected(today);
                } else {
                    *viewing_date = today;
                }
            }
            if ui.button("Close").clicked() {
                action = DatePickerAction::Close;
            }
        });
    });

    action
}
