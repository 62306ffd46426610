//! Extraction of a [`FetchResult`] from a parsed document.

use tracing::debug;

use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::images::extract_images;
use crate::metadata::resolve_metas;
use crate::result::FetchResult;
use crate::text::extract_body;
use crate::Options;

/// Decoded text of the first `<title>` element.
///
/// A page without a title is rejected with [`Error::MissingElement`] rather
/// than given an empty one.
pub fn extract_title(doc: &Document) -> Result<String> {
    let title = dom::find_first(doc, "title").ok_or(Error::MissingElement("title"))?;
    Ok(dom::text_content(&title).to_string())
}

/// Run title, metadata, excerpt and image extraction over one document.
///
/// The document is only read, so the same document always gives the same
/// result.
pub fn extract_document(doc: &Document, options: &Options) -> Result<FetchResult> {
    let title = extract_title(doc)?;
    let metas = resolve_metas(doc)?;
    let text = extract_body(doc, options.excerpt_offset)?;
    let images = extract_images(doc, options.case_insensitive_extensions);

    debug!(
        title_len = title.len(),
        text_len = text.len(),
        metas = metas.len(),
        images = images.len(),
        "extracted page summary"
    );

    Ok(FetchResult {
        title,
        text,
        images,
        metas,
    })
}

/// Parse an HTML string and extract it.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<FetchResult> {
    debug!(html_len = html.len(), "parsing document");
    let doc = dom::parse(html);
    extract_document(&doc, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title() {
        let doc = dom::parse("<html><head><title> Hello &lt;World&gt; </title></head></html>");
        assert_eq!(extract_title(&doc).ok().as_deref(), Some(" Hello <World> "));
    }

    #[test]
    fn test_extract_title_missing() {
        let doc = dom::parse("<html><head></head><body>text</body></html>");
        assert_eq!(extract_title(&doc), Err(Error::MissingElement("title")));
    }

    #[test]
    fn test_empty_title_is_not_missing() {
        let doc = dom::parse("<html><head><title></title></head></html>");
        assert_eq!(extract_title(&doc).ok().as_deref(), Some(""));
    }

    #[test]
    fn test_extract_document_assembles_all_parts() {
        let doc = dom::parse(
            r#"<html><head>
                <title>Page</title>
                <meta property="og:title" content="OG Page">
            </head><body>
                <p>Some body text.</p>
                <img src="http://x.com/a.png">
            </body></html>"#,
        );

        let result = match extract_document(&doc, &Options::default()) {
            Ok(result) => result,
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        };

        assert_eq!(result.title, "Page");
        assert_eq!(result.text, "Some body text.");
        assert_eq!(result.images, vec!["http://x.com/a.png".to_string()]);
        assert_eq!(result.meta("title"), Some("OG Page"));
    }

    #[test]
    fn test_extract_document_is_repeatable() {
        let doc = dom::parse(
            r#"<html><head><title>T</title><meta name="description" content="D"></head>
            <body>text <img src="https://x.com/i.gif"></body></html>"#,
        );
        let options = Options::default();
        assert_eq!(
            extract_document(&doc, &options),
            extract_document(&doc, &options)
        );
    }
}
