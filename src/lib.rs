//! HSTS Preload Engine - preload lookup and link upgrade for Rust
//!
//! This library answers one question (is a hostname covered by the HSTS
//! preload list, directly or through an ancestor domain whose mark
//! extends to subdomains?) and ships a thin link rewriter on top of it:
//! - Preload table loading (Chromium preload JSON, plain text tables)
//! - Ancestor-walk matching with an LRU decision cache
//! - `http://` and protocol-relative link upgrades to `https://`
//!
//! # Example
//!
//! ```rust
//! use hsts_preload_r::list::{MemoryListLoader, PreloadLoader};
//! use hsts_preload_r::{LinkRewriter, PreloadMatcher, SubdomainPolicy};
//!
//! // Build a table
//! let mut loader = MemoryListLoader::new();
//! loader.add("example.org", SubdomainPolicy::Include);
//! loader.add("login.example.net", SubdomainPolicy::ExactOnly);
//!
//! // Ask about hosts
//! let matcher = PreloadMatcher::from_loader(&loader).unwrap();
//! assert!(matcher.is_preloaded("sub.example.org"));
//! assert!(!matcher.is_preloaded("cdn.login.example.net"));
//!
//! // Upgrade links
//! let rewriter = LinkRewriter::new(matcher);
//! assert_eq!(
//!     rewriter.rewrite("http://sub.example.org/path"),
//!     "https://sub.example.org/path"
//! );
//! assert_eq!(rewriter.rewrite("ftp://example.org/x"), "ftp://example.org/x");
//! ```
//!
//! # Table semantics
//!
//! The table maps a domain to a subdomain policy:
//!
//! | Entry | Meaning |
//! |-------|---------|
//! | `Include` | Domain and all subdomains are preloaded |
//! | `ExactOnly` | Only the exact domain; ancestor walks stop here |
//! | absent | No information; the walk continues upward |
//!
//! An `ExactOnly` ancestor short-circuits the walk so a subdomain can
//! never inherit the mark from a grandparent past an exact-only boundary.

pub mod error;
pub mod list;
pub mod matcher;
pub mod rewrite;
pub mod types;

// Re-export commonly used items
pub use error::{ListErrorKind, PreloadError, Result};
pub use list::{FileListLoader, ListFormat, MemoryListLoader, NilListLoader, PreloadLoader};
pub use matcher::{PreloadMatcher, DEFAULT_CACHE_SIZE};
pub use rewrite::LinkRewriter;
pub use types::{PreloadList, SubdomainPolicy};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let table = r#"
# Preloaded with subdomains
example.org 1
paymentsite.test 1

# Exact-only boundary
login.example.net 0
"#;

        // Parse the table
        let parsed = list::text::parse_list(table).unwrap();
        assert_eq!(parsed.len(), 3);

        // Build the matcher
        let matcher = PreloadMatcher::new(parsed);

        // Direct and inherited hits
        assert!(matcher.is_preloaded("example.org"));
        assert!(matcher.is_preloaded("deep.sub.example.org"));
        assert!(matcher.is_preloaded("paymentsite.test"));

        // Exact-only: the host itself counts, its subdomains do not
        assert!(matcher.is_preloaded("login.example.net"));
        assert!(!matcher.is_preloaded("cdn.login.example.net"));

        // Misses
        assert!(!matcher.is_preloaded("unrelated.test"));

        // Rewrite links through the same engine
        let rewriter = LinkRewriter::new(matcher);
        assert_eq!(
            rewriter.rewrite("http://shop.example.org/cart?item=1"),
            "https://shop.example.org/cart?item=1"
        );
        assert_eq!(
            rewriter.rewrite("//paymentsite.test/checkout"),
            "https://paymentsite.test/checkout"
        );
        assert_eq!(
            rewriter.rewrite("http://cdn.login.example.net/logo.png"),
            "http://cdn.login.example.net/logo.png"
        );
        assert_eq!(
            rewriter.rewrite("https://example.org/"),
            "https://example.org/"
        );
    }
}
