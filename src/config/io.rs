//! Loading and saving of the flat settings document.
//!
//! The load path never raises: a missing, unreadable, or malformed file simply
//! yields the defaults. Saving returns a `Result` so callers can log the
//! failure, but nothing in the app treats a failed save as fatal.

use super::models::Settings;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// On-disk location of the settings document, relative to the working
/// directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Read settings from `path`, falling back to defaults on any failure.
pub fn load_settings(path: &Path) -> Settings {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            debug!(path = %path.display(), "No readable settings file, using defaults: {err}");
            return Settings::default();
        }
    };
    match parse_settings(&data) {
        Ok(settings) => {
            debug!(
                font_size = settings.font_size,
                line_spacing = settings.line_spacing,
                "Loaded settings"
            );
            settings
        }
        Err(err) => {
            warn!(path = %path.display(), "Malformed settings file, using defaults: {err:#}");
            Settings::default()
        }
    }
}

/// Parse a settings document, clamping out-of-range values instead of
/// rejecting them.
pub fn parse_settings(data: &str) -> Result<Settings> {
    let settings: Settings =
        serde_json::from_str(data).context("Failed to parse settings document")?;
    Ok(settings.clamped())
}

/// Write the settings document to `path`.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    let contents =
        serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;
    Ok(())
}
