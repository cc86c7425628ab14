use super::App;
use super::messages::Message;

mod appearance;
mod navigation;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SaveSettings,
    SaveProgress { title: String, chapter: usize },
}

impl App {
    /// Apply one message and return the effects the front-end must run.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::SelectNovel(key) => self.handle_select_novel(key, &mut effects),
            Message::NextChapter => self.handle_next_chapter(&mut effects),
            Message::PreviousChapter => self.handle_previous_chapter(&mut effects),
            Message::ChapterSelected(index) => self.handle_chapter_selected(index, &mut effects),
            Message::FontSizeChanged(size) => self.handle_font_size_changed(size, &mut effects),
            Message::LineSpacingChanged(spacing) => {
                self.handle_line_spacing_changed(spacing, &mut effects)
            }
            Message::RefreshLibrary => self.handle_refresh_library(),
        }

        effects
    }
}
