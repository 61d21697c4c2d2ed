//! Preload matcher.
//!
//! Answers whether a hostname is covered by the HSTS preload table,
//! walking ancestor domains when the exact host has no entry.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::error::Result;
use crate::list::PreloadLoader;
use crate::types::{PreloadList, SubdomainPolicy};

/// Default LRU cache size for preload decisions
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Preload matcher with an LRU decision cache.
///
/// The table is injected at construction and never mutated afterwards.
pub struct PreloadMatcher {
    list: PreloadList,
    cache: Mutex<LruCache<String, bool>>,
}

impl PreloadMatcher {
    /// Create a matcher over a preload table with the default cache size
    pub fn new(list: PreloadList) -> Self {
        Self::with_cache_size(list, DEFAULT_CACHE_SIZE)
    }

    /// Create a matcher with an explicit decision cache size
    pub fn with_cache_size(list: PreloadList, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            list,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Create a matcher by loading the table from a loader
    pub fn from_loader(loader: &dyn PreloadLoader) -> Result<Self> {
        Ok(Self::new(loader.load()?))
    }

    /// Create a matcher from a loader with an explicit cache size
    pub fn from_loader_with_cache_size(
        loader: &dyn PreloadLoader,
        cache_size: usize,
    ) -> Result<Self> {
        Ok(Self::with_cache_size(loader.load()?, cache_size))
    }

    /// Check whether a host is preloaded, either directly or through an
    /// ancestor domain whose mark extends to subdomains.
    ///
    /// Any input is accepted; a malformed or empty host is simply a miss.
    pub fn is_preloaded(&self, host: &str) -> bool {
        // Normalize like the table keys: lowercase, no trailing dot.
        let mut key = host.trim().to_ascii_lowercase();
        if key.ends_with('.') {
            key.pop();
        }
        if key.is_empty() {
            return false;
        }

        let mut cache = self.cache.lock();

        if let Some(&cached) = cache.get(&key) {
            return cached;
        }

        // Cache miss: compute while holding the lock to avoid multiple
        // threads computing the same key. The walk is CPU-only.
        let result = self.lookup(&key);
        cache.put(key, result);
        result
    }

    /// Walk the table without caching. `host` must be normalized.
    fn lookup(&self, host: &str) -> bool {
        // Any entry for the exact host marks it preloaded; ExactOnly only
        // withholds the mark from subdomains.
        if self.list.get(host).is_some() {
            return true;
        }

        // Strip the leftmost label and check each ancestor. An ExactOnly
        // ancestor stops the walk: higher ancestors must not be consulted.
        let mut rest = host;
        while let Some(dot) = rest.find('.') {
            rest = &rest[dot + 1..];
            match self.list.get(rest) {
                Some(SubdomainPolicy::Include) => return true,
                Some(SubdomainPolicy::ExactOnly) => return false,
                None => {}
            }
        }

        false
    }

    /// Get the number of table entries
    pub fn entry_count(&self) -> usize {
        self.list.len()
    }

    /// Clear the decision cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}
