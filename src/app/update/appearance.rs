use super::super::App;
use super::Effect;
use crate::config::{MAX_FONT_SIZE, MAX_LINE_SPACING, MIN_FONT_SIZE, MIN_LINE_SPACING};
use tracing::debug;

impl App {
    pub(super) fn handle_font_size_changed(&mut self, size: u32, effects: &mut Vec<Effect>) {
        let clamped = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if clamped != self.settings.font_size {
            debug!(
                old = self.settings.font_size,
                new = clamped,
                "Font size changed"
            );
            self.settings.font_size = clamped;
            effects.push(Effect::SaveSettings);
        }
    }

    pub(super) fn handle_line_spacing_changed(&mut self, spacing: f32, effects: &mut Vec<Effect>) {
        let clamped = spacing.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING);
        if (clamped - self.settings.line_spacing).abs() >= f32::EPSILON {
            debug!(line_spacing = clamped, "Line spacing changed");
            self.settings.line_spacing = clamped;
            effects.push(Effect::SaveSettings);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{App, Message};
    use super::*;
    use crate::config::Settings;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn build_app() -> App {
        App::bootstrap(BTreeMap::new(), PathBuf::from("unused"), Settings::default())
    }

    #[test]
    fn font_size_is_clamped_and_persisted() {
        let mut app = build_app();
        let effects = app.update(Message::FontSizeChanged(99));
        assert_eq!(app.settings().font_size, MAX_FONT_SIZE);
        assert_eq!(effects, vec![Effect::SaveSettings]);
    }

    #[test]
    fn unchanged_font_size_saves_nothing() {
        let mut app = build_app();
        app.update(Message::FontSizeChanged(16));
        let effects = app.update(Message::FontSizeChanged(16));
        assert!(effects.is_empty());
    }

    #[test]
    fn clamped_duplicate_font_size_saves_nothing() {
        let mut app = build_app();
        app.update(Message::FontSizeChanged(MAX_FONT_SIZE));
        let effects = app.update(Message::FontSizeChanged(99));
        assert!(effects.is_empty());
    }

    #[test]
    fn line_spacing_is_clamped_and_persisted() {
        let mut app = build_app();
        let effects = app.update(Message::LineSpacingChanged(0.2));
        assert_eq!(app.settings().line_spacing, MIN_LINE_SPACING);
        assert_eq!(effects, vec![Effect::SaveSettings]);
    }

    #[test]
    fn line_spacing_within_range_is_kept_as_given() {
        let mut app = build_app();
        let effects = app.update(Message::LineSpacingChanged(1.8));
        assert_eq!(app.settings().line_spacing, 1.8);
        assert_eq!(effects, vec![Effect::SaveSettings]);
    }
}
