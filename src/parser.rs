//! Novel file parsing.
//!
//! This module is intentionally small: it knows how to take the raw text of a
//! novel file and segment it into a title, an optional author, and an ordered
//! list of chapters. It performs no I/O, so the library scanner and the tests
//! can feed it text from anywhere.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

/// Placeholder title for files with no content at all.
pub const UNTITLED: &str = "未知标题";

/// Label marking the author line near the top of a file.
const AUTHOR_PREFIX: &str = "作者：";

/// How many leading lines are scanned for the author label.
const AUTHOR_SCAN_LINES: usize = 10;

static CHAPTER_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^第(\d+)章\s*(.+)$").unwrap());

/// A parsed novel. The catalog keys novels by source filename; `title` is the
/// display name and the key into the reading-progress document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Novel {
    pub title: String,
    pub author: String,
    pub chapters: Vec<Chapter>,
    pub raw_content: String,
}

/// One chapter: the verbatim heading line, its parsed ordinal, and every line
/// up to the next heading (each followed by a newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    pub number: u32,
    pub content: String,
}

/// Segment raw text into a `Novel`.
///
/// Never fails: a file without author line or chapter headings still parses,
/// it just yields an empty author and/or an empty chapter list. Lines before
/// the first heading belong to no chapter and are dropped.
pub fn parse_novel(raw: &str) -> Novel {
    let title = if raw.is_empty() {
        UNTITLED.to_string()
    } else {
        raw.lines().next().unwrap_or(UNTITLED).to_string()
    };

    let author = raw
        .lines()
        .take(AUTHOR_SCAN_LINES)
        .find_map(|line| line.strip_prefix(AUTHOR_PREFIX))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_default();

    let mut chapters = Vec::new();
    let mut current: Option<Chapter> = None;

    for line in raw.lines() {
        let trimmed = line.trim();
        if let Some(chapter) = open_chapter(trimmed) {
            if let Some(done) = current.take() {
                chapters.push(done);
            }
            current = Some(chapter);
        } else if let Some(chapter) = current.as_mut() {
            chapter.content.push_str(line);
            chapter.content.push('\n');
        }
    }
    if let Some(done) = current.take() {
        chapters.push(done);
    }

    trace!(
        title = %title,
        chapters = chapters.len(),
        "Parsed novel text"
    );

    Novel {
        title,
        author,
        chapters,
        raw_content: raw.to_string(),
    }
}

/// Match a trimmed line against the `第<N>章 <title>` heading convention.
///
/// An ordinal too large for `u32` is not treated as a heading; the line falls
/// through to the open chapter's content like any other text.
fn open_chapter(trimmed: &str) -> Option<Chapter> {
    let caps = CHAPTER_HEADING.captures(trimmed)?;
    let number = caps[1].parse::<u32>().ok()?;
    Some(Chapter {
        title: trimmed.to_string(),
        number,
        content: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_chapter_scenario() {
        let novel = parse_novel("Title\n作者：Alice\n第1章 开端\nHello\n第2章 转折\nWorld\n");
        assert_eq!(novel.title, "Title");
        assert_eq!(novel.author, "Alice");
        assert_eq!(novel.chapters.len(), 2);
        assert_eq!(novel.chapters[0].number, 1);
        assert_eq!(novel.chapters[0].title, "第1章 开端");
        assert_eq!(novel.chapters[0].content, "Hello\n");
        assert_eq!(novel.chapters[1].number, 2);
        assert_eq!(novel.chapters[1].title, "第2章 转折");
        assert_eq!(novel.chapters[1].content, "World\n");
    }

    #[test]
    fn empty_text_gets_placeholder_title() {
        let novel = parse_novel("");
        assert_eq!(novel.title, UNTITLED);
        assert!(novel.author.is_empty());
        assert!(novel.chapters.is_empty());
    }

    #[test]
    fn text_without_headings_yields_no_chapters() {
        let novel = parse_novel("一本书\n没有任何章节标记\n只是普通的段落\n");
        assert_eq!(novel.title, "一本书");
        assert!(novel.chapters.is_empty());
        assert_eq!(novel.raw_content, "一本书\n没有任何章节标记\n只是普通的段落\n");
    }

    #[test]
    fn author_suffix_is_trimmed() {
        let novel = parse_novel("书名\n作者：  张三  \n第1章 序\n正文\n");
        assert_eq!(novel.author, "张三");
    }

    #[test]
    fn author_label_beyond_first_ten_lines_is_ignored() {
        let mut text = String::from("书名\n");
        for i in 0..10 {
            text.push_str(&format!("填充行{i}\n"));
        }
        text.push_str("作者：李四\n");
        let novel = parse_novel(&text);
        assert!(novel.author.is_empty());
    }

    #[test]
    fn lines_before_first_heading_are_discarded() {
        let novel = parse_novel("书名\n引言文字\n更多引言\n第1章 开始\n正文\n");
        assert_eq!(novel.chapters.len(), 1);
        assert_eq!(novel.chapters[0].content, "正文\n");
    }

    #[test]
    fn chapter_content_keeps_interior_blank_lines() {
        let novel = parse_novel("书\n第1章 一\n甲\n\n乙\n第2章 二\n丙\n");
        assert_eq!(novel.chapters[0].content, "甲\n\n乙\n");
        assert_eq!(novel.chapters[1].content, "丙\n");
    }

    #[test]
    fn heading_is_matched_after_trimming() {
        let novel = parse_novel("书\n  第7章 远行  \n正文\n");
        assert_eq!(novel.chapters.len(), 1);
        assert_eq!(novel.chapters[0].number, 7);
        assert_eq!(novel.chapters[0].title, "第7章 远行");
    }

    #[test]
    fn heading_must_start_the_line() {
        let novel = parse_novel("书\n第1章 真章\n据说第2章 不算 是引用\n");
        assert_eq!(novel.chapters.len(), 1);
        assert_eq!(novel.chapters[0].content, "据说第2章 不算 是引用\n");
    }

    #[test]
    fn heading_without_title_text_is_content() {
        let novel = parse_novel("书\n第1章 一\n第2章\n正文\n");
        assert_eq!(novel.chapters.len(), 1);
        assert_eq!(novel.chapters[0].content, "第2章\n正文\n");
    }

    #[test]
    fn chapter_numbers_follow_file_order_not_numeric_order() {
        let novel = parse_novel("书\n第5章 乙\n正文\n第2章 甲\n正文\n");
        let numbers: Vec<u32> = novel.chapters.iter().map(|c| c.number).collect();
        assert_eq!(numbers, vec![5, 2]);
    }

    #[test]
    fn oversized_ordinal_is_not_a_heading() {
        let novel = parse_novel("书\n第1章 一\n第99999999999999999999章 溢出\n正文\n");
        assert_eq!(novel.chapters.len(), 1);
        assert_eq!(novel.chapters[0].content, "第99999999999999999999章 溢出\n正文\n");
    }
}
