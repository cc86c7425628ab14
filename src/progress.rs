//! Reading-progress persistence.
//!
//! Progress lives in a single JSON document mapping novel title to the last
//! chapter entered and a timestamp. The store loads the whole document once at
//! startup and rewrites it wholesale on every change, so entries for other
//! novels survive as long as they were on disk when the process started.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// On-disk location of the progress document, relative to the working
/// directory.
pub const PROGRESS_FILE: &str = "reading_progress.json";

/// Last recorded position for one novel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub chapter: usize,
    pub timestamp: String,
}

/// In-memory copy of the progress document.
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    entries: BTreeMap<String, ProgressEntry>,
}

impl ProgressStore {
    /// Load the document at `path`. Missing or malformed documents start the
    /// store empty; this never fails.
    pub fn load(path: &Path) -> ProgressStore {
        let entries = read_entries(path);
        debug!(path = %path.display(), entries = entries.len(), "Loaded reading progress");
        ProgressStore {
            path: path.to_path_buf(),
            entries,
        }
    }

    /// Recorded position for a novel title, if any.
    pub fn entry(&self, title: &str) -> Option<&ProgressEntry> {
        self.entries.get(title)
    }

    /// Record a position and rewrite the whole document.
    pub fn record(&mut self, title: &str, chapter: usize) -> Result<()> {
        self.entries.insert(
            title.to_string(),
            ProgressEntry {
                chapter,
                timestamp: Utc::now().to_rfc3339(),
            },
        );
        self.write_all()
    }

    fn write_all(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)
            .context("Failed to serialize reading progress")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write progress to {}", self.path.display()))?;
        Ok(())
    }
}

fn read_entries(path: &Path) -> BTreeMap<String, ProgressEntry> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => return BTreeMap::new(),
    };
    match serde_json::from_str(&data) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %path.display(), "Malformed progress file, starting empty: {err}");
            BTreeMap::new()
        }
    }
}
