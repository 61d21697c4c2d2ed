//! Link rewriting.
//!
//! Upgrades `http://` and protocol-relative links to `https://` when the
//! target host is on the preload list. Everything else passes through
//! untouched.

use std::borrow::Cow;

use tracing::trace;
use url::Url;

use crate::matcher::PreloadMatcher;

/// Rewrites external links over a preload matcher.
///
/// The rewrite is a pure function of the input string: callers get back
/// either the original slice or an owned rewritten URL.
pub struct LinkRewriter {
    matcher: PreloadMatcher,
}

impl LinkRewriter {
    /// Create a new rewriter over a matcher
    pub fn new(matcher: PreloadMatcher) -> Self {
        Self { matcher }
    }

    /// Access the underlying matcher
    pub fn matcher(&self) -> &PreloadMatcher {
        &self.matcher
    }

    /// Rewrite a link to `https://` if its host is preloaded.
    ///
    /// Returns the input unchanged when it is already `https://`, uses a
    /// scheme other than `http` or protocol-relative, does not parse as
    /// an absolute URL, or points at a host that is not preloaded.
    /// Protocol-relative input (`//host/path`) rewrites to the absolute
    /// `https://` form.
    pub fn rewrite<'a>(&self, link: &'a str) -> Cow<'a, str> {
        if link.starts_with("https://") {
            // Already HTTPS
            return Cow::Borrowed(link);
        }

        // A protocol-relative link has an empty scheme; parse it as http
        // so the host becomes visible.
        let parsed = if link.starts_with("//") {
            Url::parse(&format!("http:{}", link))
        } else {
            Url::parse(link)
        };

        let mut url = match parsed {
            Ok(url) => url,
            Err(_) => return Cow::Borrowed(link),
        };

        // Only http and protocol-relative links are upgrade candidates;
        // this leaves ftp://, mailto:, etc. alone.
        if url.scheme() != "http" {
            return Cow::Borrowed(link);
        }

        let preloaded = match url.host_str() {
            Some(host) => self.matcher.is_preloaded(host),
            None => false,
        };
        if !preloaded {
            return Cow::Borrowed(link);
        }

        // http -> https always satisfies the url crate's scheme rules
        let _ = url.set_scheme("https");
        trace!(link, "upgraded link to https");
        Cow::Owned(url.to_string())
    }
}
