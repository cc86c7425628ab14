use super::super::{App, Selection};
use super::Effect;
use crate::library::scan_library;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_select_novel(&mut self, key: String, effects: &mut Vec<Effect>) {
        let Some(novel) = self.catalog.get(&key) else {
            warn!(novel = %key, "Ignoring selection of unknown novel");
            return;
        };
        if novel.chapters.is_empty() {
            info!(novel = %novel.title, "Novel has no recognizable chapters, nothing to view");
            self.selection = None;
            return;
        }
        info!(
            novel = %novel.title,
            chapters = novel.chapters.len(),
            "Opened novel"
        );
        self.selection = Some(Selection {
            novel_key: key,
            chapter_index: 0,
        });
        self.enter_chapter(0, effects);
    }

    pub(super) fn handle_next_chapter(&mut self, effects: &mut Vec<Effect>) {
        let Some(selection) = self.selection.clone() else {
            return;
        };
        self.enter_chapter(selection.chapter_index + 1, effects);
    }

    pub(super) fn handle_previous_chapter(&mut self, effects: &mut Vec<Effect>) {
        let Some(selection) = self.selection.clone() else {
            return;
        };
        if selection.chapter_index > 0 {
            self.enter_chapter(selection.chapter_index - 1, effects);
        }
    }

    pub(super) fn handle_chapter_selected(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if self.selection.is_some() {
            self.enter_chapter(index, effects);
        }
    }

    pub(super) fn handle_refresh_library(&mut self) {
        self.catalog = scan_library(&self.library_dir);
        let retained = self.selection.take().and_then(|mut selection| {
            let novel = self.catalog.get(&selection.novel_key)?;
            if novel.chapters.is_empty() {
                return None;
            }
            selection.chapter_index = selection.chapter_index.min(novel.chapters.len() - 1);
            Some(selection)
        });
        if retained.is_none() {
            debug!("Selection no longer viewable after refresh");
        }
        self.selection = retained;
        info!(novels = self.catalog.len(), "Library refreshed");
    }

    /// Move to `index` and request a progress write. Out-of-range indices are
    /// ignored, so next/prev clamp at the ends without wraparound.
    fn enter_chapter(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(selection) = self.selection.as_mut() else {
            return;
        };
        let Some(novel) = self.catalog.get(&selection.novel_key) else {
            return;
        };
        if index >= novel.chapters.len() {
            return;
        }
        selection.chapter_index = index;
        debug!(
            novel = %novel.title,
            chapter = index + 1,
            total = novel.chapters.len(),
            "Entered chapter"
        );
        effects.push(Effect::SaveProgress {
            title: novel.title.clone(),
            chapter: index,
        });
    }
}
