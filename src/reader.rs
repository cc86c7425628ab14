//! Paragraph helpers for the presentation layer.
//!
//! Chapter content is a run of newline-terminated lines; the view wants
//! non-empty paragraphs with dialogue lines marked so it can style them
//! differently.

/// How a paragraph should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphKind {
    Body,
    Dialogue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub text: String,
}

/// Split chapter content into displayable paragraphs, dropping blank lines.
///
/// A paragraph whose trimmed text is bracketed by `「` and `」` is dialogue.
pub fn chapter_paragraphs(content: &str) -> Vec<Paragraph> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let kind = if trimmed.starts_with('「') && trimmed.ends_with('」') {
                ParagraphKind::Dialogue
            } else {
                ParagraphKind::Body
            };
            Some(Paragraph {
                kind,
                text: line.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_dropped() {
        let paragraphs = chapter_paragraphs("甲\n\n  \n乙\n");
        let texts: Vec<&str> = paragraphs.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["甲", "乙"]);
    }

    #[test]
    fn bracketed_lines_are_dialogue() {
        let paragraphs = chapter_paragraphs("他走了过来。\n「你是谁？」\n没有人回答。\n");
        assert_eq!(paragraphs[0].kind, ParagraphKind::Body);
        assert_eq!(paragraphs[1].kind, ParagraphKind::Dialogue);
        assert_eq!(paragraphs[2].kind, ParagraphKind::Body);
    }

    #[test]
    fn dialogue_detection_ignores_surrounding_whitespace() {
        let paragraphs = chapter_paragraphs("  「好。」  \n");
        assert_eq!(paragraphs[0].kind, ParagraphKind::Dialogue);
        assert_eq!(paragraphs[0].text, "  「好。」  ");
    }

    #[test]
    fn half_bracketed_lines_are_body() {
        let paragraphs = chapter_paragraphs("「未闭合的引用\n");
        assert_eq!(paragraphs[0].kind, ParagraphKind::Body);
    }
}
