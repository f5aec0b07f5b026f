// Settings service module
// Loads and saves the picker view state as TOML

mod service;

pub use service::{SettingsError, SettingsService};
