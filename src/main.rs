// Date Range Picker demo
// Main entry point

use std::rc::Rc;

use anyhow::anyhow;
use chrono::Local;
use date_range_picker::models::date_range::DateRange;
use date_range_picker::models::picker_config::ViewState;
use date_range_picker::services::range::DateRangePickerDelegate;
use date_range_picker::services::settings::SettingsService;
use date_range_picker::ui_egui::DateRangePickerWidget;

/// Logs every change as a JSON line
struct RangeLogger;

impl DateRangePickerDelegate for RangeLogger {
    fn did_change_dates(&self, range: DateRange) {
        match serde_json::to_string(&range) {
            Ok(json) => log::info!("Dates changed: {}", json),
            Err(e) => log::warn!("Failed to serialize range: {}", e),
        }
    }
}

struct DemoApp {
    picker: DateRangePickerWidget,
    // The controller only holds a weak reference
    _logger: Rc<RangeLogger>,
}

impl DemoApp {
    fn new(view_state: ViewState) -> Self {
        let logger = Rc::new(RangeLogger);
        let mut picker = DateRangePickerWidget::new(view_state, Local::now());
        picker.controller_mut().set_delegate(&logger);
        picker.controller_mut().set_completion(|range| {
            log::debug!("End date committed: {} days selected", range.duration().num_days());
        });

        Self {
            picker,
            _logger: logger,
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.picker.show(ui);

            ui.add_space(12.0);
            ui.separator();
            let range = self.picker.controller().range();
            ui.label(format!(
                "{} → {}",
                range.start.format("%B %d, %Y"),
                range.end.format("%B %d, %Y")
            ));
        });
    }
}

fn load_view_state() -> ViewState {
    let service = match SettingsService::from_project_dirs() {
        Ok(service) => service,
        Err(e) => {
            log::warn!("{}; using default view state", e);
            return ViewState::default();
        }
    };

    match service.load() {
        Ok(state) => state,
        Err(e) => {
            log::warn!("{}; using default view state", e);
            ViewState::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Date Range Picker");

    let view_state = load_view_state();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([360.0, 520.0])
            .with_min_inner_size([300.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date Range Picker",
        options,
        Box::new(move |_cc| Ok(Box::new(DemoApp::new(view_state)))),
    )
    .map_err(|e| anyhow!("Failed to run window: {}", e))
}
