//! Image URL filtering.
//!
//! Only `<img>` sources that are already absolute `http`/`https` URLs are
//! considered. Relative sources are skipped, not resolved.

use tracing::debug;

use crate::dom::{self, Document};
use crate::url_utils::{self, file_extension, split_url};

/// File extensions recognized as images.
pub static IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Test an extension against [`IMAGE_EXTENSIONS`].
///
/// The comparison is exact unless `case_insensitive` is set, so `PNG` only
/// matches in case-insensitive mode.
#[must_use]
pub fn is_image_extension(extension: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        IMAGE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    } else {
        IMAGE_EXTENSIONS.contains(&extension)
    }
}

/// Normalize one `src` value into an image URL, if it qualifies.
#[must_use]
pub fn image_url(src: &str, case_insensitive: bool) -> Option<String> {
    if !url_utils::is_valid_url(src) {
        debug!(src, "skipping image: not an absolute http(s) URL");
        return None;
    }

    let parts = split_url(src)?;
    let extension = file_extension(&parts.path);
    if !is_image_extension(extension, case_insensitive) {
        debug!(src, extension, "skipping image: unrecognized extension");
        return None;
    }

    Some(parts.rebuild())
}

/// Image URLs of every qualifying `<img>` in document order.
///
/// Duplicates are kept.
#[must_use]
pub fn extract_images(doc: &Document, case_insensitive: bool) -> Vec<String> {
    dom::find_all_in_document(doc, "img")
        .iter()
        .filter_map(|img| dom::get_attribute(img, "src"))
        .filter_map(|src| image_url(&src, case_insensitive))
        .collect()
}
