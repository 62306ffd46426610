//! # page-unfurl
//!
//! Fetch a web page and summarize it for a link preview: the page title, a
//! short plain-text excerpt, a handful of prioritized meta values and the
//! absolute image URLs found in the page.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_unfurl::extract;
//!
//! let html = r#"<html><head>
//!     <title>My Article</title>
//!     <meta name="description" content="Plain description">
//!     <meta property="og:description" content="Open Graph description">
//! </head><body>
//!     <p>Main content here.</p>
//!     <img src="https://example.com/cover.jpg">
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! assert_eq!(result.title, "My Article");
//! assert_eq!(result.text, "Main content here.");
//! assert_eq!(result.meta("description"), Some("Open Graph description"));
//! assert_eq!(result.images, vec!["https://example.com/cover.jpg"]);
//! # Ok::<(), page_unfurl::Error>(())
//! ```
//!
//! ## Pieces
//!
//! - [`is_valid_url`] decides whether a string is an acceptable fetch target.
//! - [`extract_document`] turns a parsed document into a [`FetchResult`].
//! - [`Fetcher`] ties validation, a [`PageLoader`] and extraction together.
//! - [`HttpLoader`] (feature `http`, on by default) downloads pages with a
//!   blocking `reqwest` client.

mod error;
mod extract;
mod fetcher;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Image URL filtering.
pub mod images;

/// Page loaders.
pub mod loader;

/// Meta tag catalog and resolution.
pub mod metadata;

/// Body text normalization and truncation.
pub mod text;

/// URL validation and component helpers.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_document, extract_title};
pub use fetcher::Fetcher;
#[cfg(feature = "http")]
pub use loader::HttpLoader;
pub use loader::{PageLoader, StaticLoader};
pub use options::{LoaderOptions, Options, DEFAULT_EXCERPT_OFFSET};
pub use result::FetchResult;
pub use url_utils::is_valid_url;

/// Extracts a page summary from an HTML string using default options.
///
/// # Example
///
/// ```rust
/// use page_unfurl::{extract, Error};
///
/// assert_eq!(
///     extract("<html><body>No title</body></html>"),
///     Err(Error::MissingElement("title"))
/// );
/// ```
pub fn extract(html: &str) -> Result<FetchResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts a page summary from an HTML string with custom options.
///
/// # Example
///
/// ```rust
/// use page_unfurl::{extract_with_options, Options};
///
/// let html = r#"<title>T</title><img src="http://x.com/LOGO.PNG">"#;
/// let options = Options {
///     case_insensitive_extensions: true,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert_eq!(result.images, vec!["http://x.com/LOGO.PNG"]);
/// # Ok::<(), page_unfurl::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<FetchResult> {
    extract::extract_content(html, options)
}

/// Extracts a page summary from HTML bytes, detecting the charset first.
///
/// # Example
///
/// ```rust
/// use page_unfurl::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// let result = extract_bytes(html)?;
/// assert_eq!(result.title, "Café");
/// # Ok::<(), page_unfurl::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<FetchResult> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts a page summary from HTML bytes with custom options.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<FetchResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Fetches `url` over HTTP and extracts its summary using default options.
///
/// # Example
///
/// ```rust,no_run
/// let result = page_unfurl::fetch("https://example.com/")?;
/// println!("{}: {}", result.title, result.text);
/// # Ok::<(), page_unfurl::Error>(())
/// ```
#[cfg(feature = "http")]
pub fn fetch(url: &str) -> Result<FetchResult> {
    // Rejected before the HTTP client is built, so a bad URL never hits TLS setup.
    if !is_valid_url(url) {
        return Err(Error::InvalidUrl(url.to_string()));
    }
    Fetcher::new(HttpLoader::new()?).fetch(url)
}
