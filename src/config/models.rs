use serde::Deserialize;

/// Smallest body font size (points).
pub const MIN_FONT_SIZE: u32 = 10;
/// Largest body font size (points).
pub const MAX_FONT_SIZE: u32 = 20;
/// Tightest line spacing multiplier.
pub const MIN_LINE_SPACING: f32 = 1.0;
/// Loosest line spacing multiplier.
pub const MAX_LINE_SPACING: f32 = 2.0;

/// Reader display settings; deserializable from the flat `settings.json`
/// document.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, serde::Serialize)]
pub struct Settings {
    #[serde(default = "crate::config::defaults::default_font_size")]
    pub font_size: u32,
    #[serde(default = "crate::config::defaults::default_line_spacing")]
    pub line_spacing: f32,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            font_size: crate::config::defaults::default_font_size(),
            line_spacing: crate::config::defaults::default_line_spacing(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

impl Settings {
    /// Force values loaded from disk into the valid ranges instead of
    /// rejecting the document.
    pub fn clamped(mut self) -> Settings {
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self.line_spacing = self.line_spacing.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING);
        self
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
