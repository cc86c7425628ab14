//! Reader session state.
//!
//! The session owns the catalog, the current settings, and the navigation
//! position. Front-ends drive it with [`Message`]s through [`App::update`] and
//! perform the returned [`Effect`]s (persisting settings and progress), so the
//! reducer itself stays pure and testable.

mod messages;
mod update;

pub use messages::Message;
pub use update::Effect;

use crate::config::Settings;
use crate::parser::{Chapter, Novel};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// Navigation position within the currently open novel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub novel_key: String,
    pub chapter_index: usize,
}

/// Core application state. `selection` is `None` until a novel with at least
/// one recognizable chapter is opened.
pub struct App {
    library_dir: PathBuf,
    catalog: BTreeMap<String, Novel>,
    settings: Settings,
    selection: Option<Selection>,
}

impl App {
    pub fn bootstrap(
        catalog: BTreeMap<String, Novel>,
        library_dir: PathBuf,
        settings: Settings,
    ) -> App {
        info!(
            novels = catalog.len(),
            font_size = settings.font_size,
            "Initialized reader session"
        );
        App {
            library_dir,
            catalog,
            settings,
            selection: None,
        }
    }

    pub fn catalog(&self) -> &BTreeMap<String, Novel> {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// The open novel, if any.
    pub fn current_novel(&self) -> Option<&Novel> {
        let selection = self.selection.as_ref()?;
        self.catalog.get(&selection.novel_key)
    }

    /// The chapter the session is positioned on, if any.
    pub fn current_chapter(&self) -> Option<&Chapter> {
        let selection = self.selection.as_ref()?;
        self.current_novel()?.chapters.get(selection.chapter_index)
    }
}
