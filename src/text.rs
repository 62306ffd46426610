//! Body excerpt: whitespace normalization and word-boundary truncation.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{self, Document};
use crate::error::{Error, Result};

/// Any run of whitespace, newlines and tabs included.
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RUN regex"));

/// Trim the text and collapse every whitespace run into a single space.
///
/// ```rust
/// use page_unfurl::text::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Hello\n\nworld   foo  "), "Hello world foo");
/// ```
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Cut `text` at the first space found at or after character index `offset`.
///
/// The space itself is not kept. When no space exists past `offset` the text
/// is returned whole.
#[must_use]
pub fn truncate_at_word(text: &str, offset: usize) -> &str {
    let cut = text
        .char_indices()
        .skip(offset)
        .find(|&(_, c)| c == ' ')
        .map(|(byte_index, _)| byte_index);

    match cut {
        Some(byte_index) => &text[..byte_index],
        None => text,
    }
}

/// Plain-text excerpt of the document body.
///
/// Fails with [`Error::MissingElement`] when the document has no `<body>`.
pub fn extract_body(doc: &Document, offset: usize) -> Result<String> {
    let body = dom::find_first(doc, "body").ok_or(Error::MissingElement("body"))?;
    let normalized = normalize_whitespace(&dom::raw_text(&body));
    Ok(truncate_at_word(&normalized, offset).to_string())
}
