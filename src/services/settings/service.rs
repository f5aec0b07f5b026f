use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::picker_config::ViewState;

const SETTINGS_FILE: &str = "date_range_picker.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Could not determine a configuration directory")]
    NoConfigDir,
    #[error("Failed to access settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// File-backed store for the picker's [`ViewState`]
pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the platform configuration directory
    pub fn from_project_dirs() -> Result<Self, SettingsError> {
        let dirs = ProjectDirs::from("com", "Ken24T", "DateRangePicker")
            .ok_or(SettingsError::NoConfigDir)?;
        Ok(Self::new(dirs.config_dir().join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the view state; a missing file yields the defaults
    pub fn load(&self) -> Result<ViewState, SettingsError> {
        if !self.path.exists() {
            log::info!(
                "No settings file at {}, using defaults",
                self.path.display()
            );
            return Ok(ViewState::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        let state: ViewState = toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if let Some(range) = state.preselected_range {
            if !range.is_consistent() {
                log::warn!(
                    "Preselected range in {} ends before it starts; it will be clamped",
                    self.path.display()
                );
            }
        }

        Ok(state)
    }

    /// Write the view state, creating parent directories as needed
    pub fn save(&self, state: &ViewState) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(state)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, content).map_err(|source| SettingsError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}
