//! Error types for page-unfurl.
//!
//! Extraction either succeeds completely or fails with one of these variants;
//! there are no partial results.

/// Error type for fetch and extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The URL is not an absolute `http`/`https` address.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The page loader returned no document for the URL.
    #[error("Unable to load URL: {0}")]
    LoadFailure(String),

    /// A required structural element is absent from the document.
    #[error("Missing <{0}> element")]
    MissingElement(&'static str),

    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),
}

/// Result type alias for fetch and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
