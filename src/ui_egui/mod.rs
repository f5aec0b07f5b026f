pub mod date_range_picker;

pub use date_range_picker::DateRangePickerWidget;
