//! Fetch orchestration: validate the URL, load the page, extract it.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::extract::extract_document;
use crate::loader::PageLoader;
use crate::result::FetchResult;
use crate::url_utils::is_valid_url;
use crate::Options;

/// Fetches pages through a [`PageLoader`] and summarizes them.
///
/// Holds no per-request state, so one fetcher can serve any number of calls.
#[derive(Debug, Clone, Default)]
pub struct Fetcher<L> {
    loader: L,
    options: Options,
}

impl<L: PageLoader> Fetcher<L> {
    /// Create a fetcher with default extraction options.
    pub fn new(loader: L) -> Self {
        Self::with_options(loader, Options::default())
    }

    pub fn with_options(loader: L, options: Options) -> Self {
        Self { loader, options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// Fetch `url` and extract its summary.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if `url` is not an absolute `http`/`https` URL;
    ///   the loader is not called.
    /// - [`Error::LoadFailure`] if the loader returns no document.
    /// - [`Error::MissingElement`] if the page has no `<title>`.
    pub fn fetch(&self, url: &str) -> Result<FetchResult> {
        if !is_valid_url(url) {
            warn!(url, "rejecting invalid URL");
            return Err(Error::InvalidUrl(url.to_string()));
        }

        debug!(url, "loading page");
        let doc = self.loader.load(url).ok_or_else(|| {
            warn!(url, "page loader returned no document");
            Error::LoadFailure(url.to_string())
        })?;

        extract_document(&doc, &self.options)
    }
}
