//! Page loaders: the collaborators that turn a URL into a parsed document.
//!
//! A loader reports failure as `None` without saying why; the reason is only
//! logged. Timeouts, redirects and body limits belong to the loader, never to
//! the extractor.

use crate::dom::{self, Document};

/// Fetches and parses one page.
///
/// Any `Fn(&str) -> Option<String>` closure returning raw HTML is a loader:
///
/// ```rust
/// use page_unfurl::{Fetcher, PageLoader};
///
/// let loader = |_url: &str| Some("<html><head><title>Hi</title></head></html>".to_string());
/// assert!(loader.load("http://example.com/").is_some());
///
/// let result = Fetcher::new(loader).fetch("http://example.com/")?;
/// assert_eq!(result.title, "Hi");
/// # Ok::<(), page_unfurl::Error>(())
/// ```
pub trait PageLoader {
    /// Load `url`, returning `None` on any failure.
    fn load(&self, url: &str) -> Option<Document>;
}

impl<F> PageLoader for F
where
    F: Fn(&str) -> Option<String>,
{
    fn load(&self, url: &str) -> Option<Document> {
        self(url).map(|html| dom::parse(&html))
    }
}

/// Serves the same HTML for every URL.
///
/// Used to run the fetch pipeline over HTML obtained elsewhere, such as
/// stdin or a test fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticLoader {
    html: String,
}

impl StaticLoader {
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

impl PageLoader for StaticLoader {
    fn load(&self, _url: &str) -> Option<Document> {
        if self.html.is_empty() {
            return None;
        }
        Some(dom::parse(&self.html))
    }
}

#[cfg(feature = "http")]
pub use http::HttpLoader;

#[cfg(feature = "http")]
mod http {
    use std::io::Read;

    use reqwest::blocking::Client;
    use tracing::{debug, warn};

    use super::PageLoader;
    use crate::dom::{self, Document};
    use crate::encoding::transcode_to_utf8;
    use crate::error::{Error, Result};
    use crate::options::LoaderOptions;

    /// Blocking HTTP loader backed by `reqwest`.
    ///
    /// Follows reqwest's default redirect policy and never retries.
    #[derive(Debug, Clone)]
    pub struct HttpLoader {
        client: Client,
        options: LoaderOptions,
    }

    impl HttpLoader {
        /// Build a loader with default [`LoaderOptions`].
        pub fn new() -> Result<Self> {
            Self::with_options(LoaderOptions::default())
        }

        /// Build a loader with custom timeout, user agent and body limit.
        pub fn with_options(options: LoaderOptions) -> Result<Self> {
            let client = Client::builder()
                .timeout(options.timeout)
                .user_agent(options.user_agent.as_str())
                .build()
                .map_err(|e| Error::HttpClient(e.to_string()))?;

            Ok(Self { client, options })
        }

        #[must_use]
        pub fn options(&self) -> &LoaderOptions {
            &self.options
        }

        fn fetch_bytes(&self, url: &str) -> Option<Vec<u8>> {
            let response = match self.client.get(url).send() {
                Ok(response) => response,
                Err(err) => {
                    warn!(url, error = %err, "request failed");
                    return None;
                }
            };

            let status = response.status();
            if !status.is_success() {
                warn!(url, %status, "server returned an error status");
                return None;
            }

            let limit = u64::try_from(self.options.max_body_bytes).unwrap_or(u64::MAX);
            let mut body = Vec::new();
            if let Err(err) = response.take(limit).read_to_end(&mut body) {
                warn!(url, error = %err, "failed to read response body");
                return None;
            }

            debug!(url, %status, bytes = body.len(), "page downloaded");
            Some(body)
        }
    }

    impl PageLoader for HttpLoader {
        fn load(&self, url: &str) -> Option<Document> {
            let body = self.fetch_bytes(url)?;
            if body.is_empty() {
                warn!(url, "empty response body");
                return None;
            }

            Some(dom::parse(&transcode_to_utf8(&body)))
        }
    }
}
