//! Character encoding detection for downloaded pages.
//!
//! Response bodies arrive as bytes. The charset is taken from a byte order
//! mark, then from the first `<meta>` charset declaration, and defaults to
//! UTF-8. Undecodable bytes become U+FFFD instead of failing the fetch.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Only the start of the document is searched for a declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("META_CHARSET_RE regex")
});

/// Detect the character encoding of an HTML byte stream.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<&str> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Decode HTML bytes into a UTF-8 string.
///
/// ```
/// use page_unfurl::encoding::transcode_to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(transcode_to_utf8(html).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let (decoded, _encoding_used, _had_errors) = detect_encoding(html).decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detect_from_content_type() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn detect_is_case_insensitive() {
        let html = b"<HTML><HEAD><META CHARSET=SHIFT_JIS></HEAD></HTML>";
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn bom_wins_over_declaration() {
        let html = b"\xEF\xBB\xBF<meta charset=\"windows-1252\"><p>x</p>";
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let html = br#"<meta charset="not-a-charset">"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn default_to_utf8_when_no_charset() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn transcode_windows1252() {
        let html = b"<meta charset=\"windows-1252\"><p>\x93Hello\x94</p>";
        assert!(transcode_to_utf8(html).contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn transcode_strips_utf8_bom() {
        let html = b"\xEF\xBB\xBF<title>T</title>";
        assert_eq!(transcode_to_utf8(html), "<title>T</title>");
    }

    #[test]
    fn invalid_bytes_do_not_fail() {
        let result = transcode_to_utf8(b"<body>Test \xFF\xFE Invalid</body>");
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
        assert!(result.contains('\u{FFFD}'));
    }
}
