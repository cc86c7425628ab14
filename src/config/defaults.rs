pub(crate) fn default_font_size() -> u32 {
    12
}

pub(crate) fn default_line_spacing() -> f32 {
    1.5
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}
