//! Configuration options for extraction and page loading.
//!
//! Both structs have public fields and a `Default` implementation; override
//! only what you need with struct update syntax.

use std::time::Duration;

/// Default character offset after which the excerpt is cut at a space.
pub const DEFAULT_EXCERPT_OFFSET: usize = 200;

/// Configuration options for extraction.
///
/// # Example
///
/// ```rust
/// use page_unfurl::Options;
///
/// let options = Options {
///     case_insensitive_extensions: true,
///     ..Options::default()
/// };
/// assert_eq!(options.excerpt_offset, 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Character index from which the excerpt searches for a cutting space.
    ///
    /// Default: `200`
    pub excerpt_offset: usize,

    /// Lower-case image file extensions before testing them against the
    /// extension catalog.
    ///
    /// When `false`, `photo.PNG` is not recognized as an image.
    ///
    /// Default: `false`
    pub case_insensitive_extensions: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            excerpt_offset: DEFAULT_EXCERPT_OFFSET,
            case_insensitive_extensions: false,
        }
    }
}

/// Configuration for the HTTP page loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Whole-request timeout.
    ///
    /// Default: 10 seconds
    pub timeout: Duration,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Response bodies are cut to this many bytes before parsing.
    ///
    /// Default: 2 MiB
    pub max_body_bytes: usize,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: concat!("page-unfurl/", env!("CARGO_PKG_VERSION")).to_string(),
            max_body_bytes: 2 * 1024 * 1024,
        }
    }
}
