//! URL Utility Functions
//!
//! Syntactic URL validation and the small helpers the image filter needs to
//! take a URL apart and put it back together. Nothing here touches the
//! network, and relative URLs are never resolved against a base.

use url::Url;

/// Schemes accepted as fetch targets.
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Components of an absolute URL, as seen by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Lower-case scheme.
    pub scheme: String,
    /// Host, if the URL carries one.
    pub host: Option<String>,
    /// Explicit port, if any.
    pub port: Option<u16>,
    /// Path, always starting with `/` for `http`/`https`.
    pub path: String,
}

impl UrlParts {
    fn from_url(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().map(str::to_string),
            port: url.port(),
            path: url.path().to_string(),
        }
    }

    /// Rebuild `scheme://host/path`, dropping port, query and fragment.
    #[must_use]
    pub fn rebuild(&self) -> String {
        format!(
            "{}://{}{}",
            self.scheme,
            self.host.as_deref().unwrap_or_default(),
            self.path
        )
    }
}

/// Split a string into URL components.
///
/// Returns `None` for anything the URL parser rejects, including relative
/// URLs and URLs with a non-numeric or out-of-range port.
#[must_use]
pub fn split_url(s: &str) -> Option<UrlParts> {
    Url::parse(s).ok().map(|url| UrlParts::from_url(&url))
}

/// Check whether a string is an acceptable fetch target.
///
/// Accepts absolute `http`/`https` URLs only. The scheme must be followed
/// literally by `://` in the input, so `http:/example.com` is rejected even
/// though a lenient parser would repair it.
///
/// # Example
///
/// ```rust
/// use page_unfurl::is_valid_url;
///
/// assert!(is_valid_url("https://example.com:8080/a/b"));
/// assert!(!is_valid_url("ftp://example.com"));
/// assert!(!is_valid_url("example.com/page"));
/// ```
#[must_use]
pub fn is_valid_url(candidate: &str) -> bool {
    let Some(parts) = split_url(candidate) else {
        return false;
    };

    if !ALLOWED_SCHEMES.contains(&parts.scheme.as_str()) {
        return false;
    }

    let separator = candidate.get(parts.scheme.len()..parts.scheme.len() + 3);
    if separator != Some("://") {
        return false;
    }

    // Port parsing is left to the parser: a non-numeric port never gets here.
    // Host and path come out of a `&str`, so they are already UTF-8 text;
    // percent-escapes are opaque bytes and not decoded.
    true
}

/// File extension of the last path segment, or an empty string.
///
/// `/img/logo.png` gives `png`, `/dir.d/file` gives an empty string.
#[must_use]
pub fn file_extension(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.rsplit_once('.').map_or("", |(_, ext)| ext)
}
