//! Character decoding for novel files.
//!
//! Library files are usually UTF-8, but plenty of older Chinese novels ship as
//! GBK. We try strict UTF-8 first and fall back to strict GBK; a file that is
//! neither yields `None` and the caller skips it.

use encoding_rs::GBK;

/// Decode raw file bytes, or `None` when neither encoding applies cleanly.
pub fn decode_text(bytes: &[u8]) -> Option<String> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some(strip_bom(text).to_string());
    }
    let (text, _, had_errors) = GBK.decode(bytes);
    if had_errors {
        return None;
    }
    Some(text.into_owned())
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_text("第1章 你好".as_bytes()).as_deref(), Some("第1章 你好"));
    }

    #[test]
    fn utf8_bom_is_stripped() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("书名".as_bytes());
        assert_eq!(decode_text(&bytes).as_deref(), Some("书名"));
    }

    #[test]
    fn gbk_is_the_fallback() {
        let (bytes, _, _) = GBK.encode("你好");
        assert_eq!(decode_text(&bytes).as_deref(), Some("你好"));
    }

    #[test]
    fn undecodable_bytes_yield_none() {
        assert_eq!(decode_text(&[0xff, 0xff, 0xff]), None);
    }
}
