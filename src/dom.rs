//! DOM Operations Adapter
//!
//! The extractor only reads the parsed document through this small set of
//! capabilities: find the first element by tag, find all elements by tag,
//! read an attribute, read decoded text and read body text without script
//! content. Everything maps directly onto `dom_query`.

pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Elements whose text never counts as readable page text.
const NON_TEXT_TAGS: [&str; 3] = ["script", "style", "noscript"];

// === Parsing ===

/// Parse an HTML string into a document.
///
/// Parsing never fails: the HTML5 algorithm recovers from any markup and
/// always yields `<html>`, `<head>` and `<body>` elements.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// First element in document order matching a tag name.
#[must_use]
pub fn find_first<'a>(doc: &'a Document, tag: &str) -> Option<Selection<'a>> {
    doc.select(tag)
        .nodes()
        .first()
        .map(|node| Selection::from(*node))
}

/// All elements matching a tag name under `sel`, in document order.
#[must_use]
pub fn find_all<'a>(sel: &Selection<'a>, tag: &str) -> Vec<Selection<'a>> {
    sel.select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// All elements matching a tag name anywhere in the document.
#[must_use]
pub fn find_all_in_document<'a>(doc: &'a Document, tag: &str) -> Vec<Selection<'a>> {
    doc.select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Attribute Operations ===

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists.
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

// === Text Content ===

/// All decoded text of the element and its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Readable text of the element: descendant text nodes outside of
/// `<script>`, `<style>` and `<noscript>`, concatenated in document order.
#[must_use]
pub fn raw_text(sel: &Selection) -> String {
    let Some(root) = sel.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root.descendants() {
        if !node.is_text() {
            continue;
        }

        let hidden = std::iter::successors(node.parent(), |ancestor| ancestor.parent())
            .filter_map(|ancestor| ancestor.node_name())
            .any(|tag| NON_TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)));
        if hidden {
            continue;
        }

        out.push_str(&node.text());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_always_has_head_and_body() {
        let doc = parse("<p>just a fragment</p>");
        assert!(find_first(&doc, "head").is_some());
        assert!(find_first(&doc, "body").is_some());
    }

    #[test]
    fn test_find_first_returns_document_order() {
        let doc = parse("<html><head><title>One</title></head><body><title>Two</title></body></html>");
        let title = find_first(&doc, "title").map(|t| text_content(&t).to_string());
        assert_eq!(title.as_deref(), Some("One"));
    }

    #[test]
    fn test_find_first_missing() {
        let doc = parse("<html><head></head><body></body></html>");
        assert!(find_first(&doc, "title").is_none());
    }

    #[test]
    fn test_find_all_scoped_to_selection() {
        let doc = parse(
            r#"<html><head><meta name="a" content="1"></head>
            <body><meta name="b" content="2"></body></html>"#,
        );
        let Some(head) = find_first(&doc, "head") else {
            panic!("head expected");
        };
        let metas = find_all(&head, "meta");
        assert_eq!(metas.len(), 1);
        assert_eq!(get_attribute(&metas[0], "name").as_deref(), Some("a"));
    }

    #[test]
    fn test_attributes() {
        let doc = parse(r#"<img src="a.png" alt="">"#);
        let imgs = find_all_in_document(&doc, "img");
        assert_eq!(imgs.len(), 1);
        assert!(has_attribute(&imgs[0], "alt"));
        assert!(!has_attribute(&imgs[0], "title"));
        assert_eq!(get_attribute(&imgs[0], "src").as_deref(), Some("a.png"));
        assert_eq!(get_attribute(&imgs[0], "alt").as_deref(), Some(""));
    }

    #[test]
    fn test_text_content_decodes_entities() {
        let doc = parse("<title>Tom &amp; Jerry</title>");
        let title = find_first(&doc, "title").map(|t| text_content(&t).to_string());
        assert_eq!(title.as_deref(), Some("Tom & Jerry"));
    }

    #[test]
    fn test_raw_text_skips_scripts_and_styles() {
        let doc = parse(
            "<body><p>Hello</p><script>var x = 1;</script><style>p{}</style><p> world</p></body>",
        );
        let Some(body) = find_first(&doc, "body") else {
            panic!("body expected");
        };
        assert_eq!(raw_text(&body), "Hello world");
    }

    #[test]
    fn test_raw_text_skips_nested_noscript_content() {
        let doc = parse(
            "<body><noscript><p>Enable <b>JavaScript</b></p></noscript><p>Visible</p></body>",
        );
        let Some(body) = find_first(&doc, "body") else {
            panic!("body expected");
        };
        assert_eq!(raw_text(&body), "Visible");
    }
}
