//! Library scanning.
//!
//! Walks the flat library directory, decodes and parses every `.txt` file, and
//! builds the in-memory catalog keyed by filename. Filenames disambiguate
//! same-titled novels; display uses the parsed title. One bad file never
//! aborts the scan.

use crate::decoding::decode_text;
use crate::parser::{Novel, parse_novel};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scan `dir` for novel files and parse each one.
///
/// A missing directory is created and reported as an empty catalog. Files that
/// cannot be read, decoded, or keyed are skipped with a warning.
pub fn scan_library(dir: &Path) -> BTreeMap<String, Novel> {
    if !dir.exists() {
        if let Err(err) = fs::create_dir_all(dir) {
            warn!(path = %dir.display(), "Failed to create library directory: {err}");
        } else {
            info!(path = %dir.display(), "Created empty library directory");
        }
        return BTreeMap::new();
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(path = %dir.display(), "Failed to read library directory: {err}");
            return BTreeMap::new();
        }
    };

    let mut catalog = BTreeMap::new();
    let mut skipped = 0usize;
    for entry in entries.flatten() {
        let path = entry.path();
        if !is_novel_file(&path) {
            continue;
        }
        let Some(filename) = path.file_name().map(|name| name.to_string_lossy().into_owned())
        else {
            continue;
        };
        match load_novel(&path) {
            Some(novel) => {
                catalog.insert(filename, novel);
            }
            None => skipped += 1,
        }
    }

    info!(
        novels = catalog.len(),
        skipped,
        path = %dir.display(),
        "Scanned library"
    );
    catalog
}

fn load_novel(path: &Path) -> Option<Novel> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), "Failed to read novel file: {err}");
            return None;
        }
    };
    let Some(text) = decode_text(&bytes) else {
        warn!(path = %path.display(), "File is neither UTF-8 nor GBK, skipping");
        return None;
    };
    let novel = parse_novel(&text);
    debug!(
        path = %path.display(),
        title = %novel.title,
        chapters = novel.chapters.len(),
        total_chars = novel.raw_content.len(),
        "Parsed novel file"
    );
    Some(novel)
}

fn is_novel_file(path: &Path) -> bool {
    path.is_file()
        && matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some(ext) if ext == "txt"
        )
}
