//! Display settings for the reader.
//!
//! All user-tunable settings are centralized here and loaded from
//! `settings.json` if present. Any missing or invalid entries fall back to
//! sensible defaults so the reader can still launch.

mod defaults;
mod io;
mod models;

pub use io::{SETTINGS_FILE, load_settings, parse_settings, save_settings};
pub use models::{
    LogLevel, MAX_FONT_SIZE, MAX_LINE_SPACING, MIN_FONT_SIZE, MIN_LINE_SPACING, Settings,
};
