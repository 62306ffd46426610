//! Result type for extraction output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Summary of a single web page.
///
/// Produced once per successful fetch and never modified by the library
/// afterwards. Serializes to JSON with the field names `title`, `text`,
/// `images` and `metas`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    /// Decoded text of the first `<title>` element.
    pub title: String,

    /// Whitespace-collapsed body text, cut at the first word boundary after
    /// the excerpt offset.
    pub text: String,

    /// Absolute image URLs in document order (duplicates kept).
    pub images: Vec<String>,

    /// Resolved meta values keyed by field name (`description`, `image`,
    /// `title`, `video`, `video_type`, `video_width`, `video_height`).
    pub metas: BTreeMap<String, String>,
}

impl FetchResult {
    /// Look up a resolved meta field.
    #[must_use]
    pub fn meta(&self, field: &str) -> Option<&str> {
        self.metas.get(field).map(String::as_str)
    }
}
