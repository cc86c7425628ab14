//! Entry point for the novel reader.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load settings and reading progress.
//! - Scan the library directory into a catalog.
//! - Drive the reader session and perform the effects it requests.
//!
//! The graphical front-end lives outside this crate; the `list` and `read`
//! commands below are a thin stand-in that exercises the same session API.

mod app;
mod config;
mod decoding;
mod library;
mod parser;
mod progress;
mod reader;

use crate::app::{App, Effect, Message};
use crate::config::{SETTINGS_FILE, load_settings, save_settings};
use crate::library::scan_library;
use crate::progress::{PROGRESS_FILE, ProgressStore};
use crate::reader::{ParagraphKind, chapter_paragraphs};
use anyhow::{Context, Result, anyhow, bail};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

/// Fixed library folder, relative to the working directory.
const LIBRARY_DIR: &str = "novel";

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let command = parse_args()?;

    let settings = load_settings(Path::new(SETTINGS_FILE));
    set_log_level(reload_handle, settings.log_level.as_filter_str());

    let library_dir = PathBuf::from(LIBRARY_DIR);
    let catalog = scan_library(&library_dir);
    let progress = ProgressStore::load(Path::new(PROGRESS_FILE));
    let mut session = App::bootstrap(catalog, library_dir, settings);

    match command {
        Command::List => list_novels(&session),
        Command::Read { filename, chapter } => {
            read_novel(&mut session, progress, &filename, chapter)
        }
    }
}

enum Command {
    List,
    Read {
        filename: String,
        chapter: Option<usize>,
    },
}

fn parse_args() -> Result<Command> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        None | Some("list") => Ok(Command::List),
        Some("read") => {
            let filename = args
                .next()
                .ok_or_else(|| anyhow!("Usage: novelshelf read <filename> [chapter]"))?;
            let chapter = match args.next() {
                Some(raw) => Some(
                    raw.parse::<usize>()
                        .with_context(|| format!("Invalid chapter number: {raw}"))?,
                ),
                None => None,
            };
            Ok(Command::Read { filename, chapter })
        }
        Some(other) => Err(anyhow!(
            "Unknown command: {other} (expected `list` or `read`)"
        )),
    }
}

fn list_novels(session: &App) -> Result<()> {
    if session.catalog().is_empty() {
        println!("No novels found. Drop .txt files into {LIBRARY_DIR}/ and rerun.");
        return Ok(());
    }
    for (filename, novel) in session.catalog() {
        let author = if novel.author.is_empty() {
            "未知"
        } else {
            novel.author.as_str()
        };
        println!(
            "{filename}: {} / {author} ({} chapters)",
            novel.title,
            novel.chapters.len()
        );
    }
    Ok(())
}

fn read_novel(
    session: &mut App,
    mut progress: ProgressStore,
    filename: &str,
    chapter: Option<usize>,
) -> Result<()> {
    let mut effects = session.update(Message::SelectNovel(filename.to_string()));
    let Some(novel) = session.current_novel() else {
        bail!("{filename} is not readable: not in the library, or it has no recognizable chapters");
    };
    let title = novel.title.clone();

    // The session never restores position on its own; the front-end applies
    // the recorded chapter when the user did not name one.
    let target = chapter.or_else(|| progress.entry(&title).map(|entry| entry.chapter));
    if let Some(target) = target {
        if target != 0 {
            effects.extend(session.update(Message::ChapterSelected(target)));
        }
    }

    run_effects(session, &mut progress, effects);
    print_chapter(session)
}

fn print_chapter(session: &App) -> Result<()> {
    let novel = session
        .current_novel()
        .ok_or_else(|| anyhow!("No novel is open"))?;
    let chapter = session
        .current_chapter()
        .ok_or_else(|| anyhow!("No chapter is open"))?;

    println!("{}", chapter.title);
    println!();
    for paragraph in chapter_paragraphs(&chapter.content) {
        match paragraph.kind {
            ParagraphKind::Dialogue => println!("    {}", paragraph.text.trim()),
            ParagraphKind::Body => println!("{}", paragraph.text),
        }
        println!();
    }

    let index = session
        .selection()
        .map(|selection| selection.chapter_index)
        .unwrap_or(0);
    println!("[{} {}/{}]", novel.title, index + 1, novel.chapters.len());
    Ok(())
}

/// Perform the side effects requested by the reducer. Persistence is
/// best-effort: failures are logged and otherwise ignored.
fn run_effects(session: &App, progress: &mut ProgressStore, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::SaveSettings => {
                if let Err(err) = save_settings(Path::new(SETTINGS_FILE), session.settings()) {
                    warn!("Failed to persist settings: {err:#}");
                }
            }
            Effect::SaveProgress { title, chapter } => {
                if let Err(err) = progress.record(&title, chapter) {
                    warn!("Failed to persist reading progress: {err:#}");
                }
            }
        }
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(filter_layer))
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from settings: {err}");
    } else {
        info!(%level, "Applied log level from settings");
    }
}
