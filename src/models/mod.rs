// Module exports for models

pub mod date_range;
pub mod picker_config;
