//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file in the user's config
//! directory.
//!
//! Settings are read before the Bevy app exists, so the log subscriber is not
//! installed yet. Loading therefore records where the settings came from in a
//! [`SettingsOrigin`] resource, and [`log_settings_origin`] reports it once
//! logging is up.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings
//! - Save failures are returned to the caller

use super::error::{CoreError, CoreResult};
use super::GameSettings;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Where the active settings came from
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub enum SettingsOrigin {
    /// Parsed from this file
    File(PathBuf),
    /// No file at this path
    Missing(PathBuf),
    /// The file exists but could not be used
    Invalid { path: PathBuf, reason: String },
}

/// Resolve the settings file path
///
/// Returns `settings.json` in the user's configuration directory, or in the
/// working directory if no config directory can be determined.
pub fn settings_path() -> PathBuf {
    match ProjectDirs::from("com", "trilltino", "Dragboard") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Read and validate settings from `path`
pub fn load_settings_from(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path).map_err(|source| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path`, falling back to defaults on any failure
pub fn load_settings_or_default(path: &Path) -> (GameSettings, SettingsOrigin) {
    if !path.exists() {
        return (GameSettings::default(), SettingsOrigin::Missing(path.to_path_buf()));
    }
    match load_settings_from(path) {
        Ok(settings) => (settings, SettingsOrigin::File(path.to_path_buf())),
        Err(e) => (
            GameSettings::default(),
            SettingsOrigin::Invalid {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        ),
    }
}

/// Write settings as pretty JSON, creating parent directories as needed
pub fn save_settings_to(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    settings.validate()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CoreError::SettingsIo {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(|source| CoreError::SettingsIo {
        path: path.to_path_buf(),
        source,
    })
}

/// Startup system reporting how settings were resolved
pub fn log_settings_origin(origin: Option<Res<SettingsOrigin>>) {
    match origin.as_deref() {
        Some(SettingsOrigin::File(path)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
        }
        Some(SettingsOrigin::Missing(path)) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        }
        Some(SettingsOrigin::Invalid { path, reason }) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, reason
            );
        }
        None => debug!("[SETTINGS] Settings inserted directly"),
    }
}
