//! Meta tag catalog.
//!
//! Each rule maps one `<meta KEY="TAG" content="...">` shape to an output
//! field. Rules are listed from least to most important: when several rules
//! for the same field match, the one further down the list wins.

/// One attribute/value pair recognized on a `<meta>` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetaRule {
    /// Output field written on a match.
    pub field: &'static str,
    /// Attribute inspected on the `<meta>` element.
    pub key: &'static str,
    /// Expected attribute value, lower-case.
    pub tag: &'static str,
}

impl MetaRule {
    const fn new(field: &'static str, key: &'static str, tag: &'static str) -> Self {
        Self { field, key, tag }
    }
}

/// The catalog, in ascending priority.
pub static META_RULES: [MetaRule; 10] = [
    MetaRule::new("description", "name", "description"),
    MetaRule::new("description", "property", "og:description"),
    MetaRule::new("description", "property", "pinterestapp:about"),
    MetaRule::new("image", "property", "og:image"),
    MetaRule::new("image", "itemprop", "image"),
    MetaRule::new("title", "property", "og:title"),
    MetaRule::new("video", "property", "og:video"),
    MetaRule::new("video_type", "property", "og:video:type"),
    MetaRule::new("video_width", "property", "og:video:width"),
    MetaRule::new("video_height", "property", "og:video:height"),
];
