use std::collections::HashMap;

/// Subdomain policy attached to a preloaded domain.
///
/// The third state of the table, "no information", is the absence of
/// an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubdomainPolicy {
    /// The domain and all of its subdomains are preloaded
    Include,
    /// Only the exact domain is preloaded; subdomains do not inherit
    /// the mark, and ancestor lookups stop here
    ExactOnly,
}

impl SubdomainPolicy {
    /// Check if this policy extends the preload mark to subdomains
    pub fn includes_subdomains(&self) -> bool {
        matches!(self, SubdomainPolicy::Include)
    }
}

/// The HSTS preload table: domain label string to subdomain policy.
///
/// Immutable after load. Keys are normalized on insert: ASCII-lowercased
/// with a single trailing dot stripped.
#[derive(Debug, Clone, Default)]
pub struct PreloadList {
    entries: HashMap<String, SubdomainPolicy>,
}

impl PreloadList {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Insert a domain with its policy. The domain is normalized; a later
    /// insert for the same domain overwrites the earlier policy.
    pub fn insert(&mut self, domain: &str, policy: SubdomainPolicy) {
        self.entries.insert(normalize_domain(domain), policy);
    }

    /// Look up the policy for an exact domain. The query must already be
    /// normalized (lowercase, no trailing dot).
    pub fn get(&self, domain: &str) -> Option<SubdomainPolicy> {
        self.entries.get(domain).copied()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, SubdomainPolicy)> for PreloadList {
    fn from_iter<I: IntoIterator<Item = (String, SubdomainPolicy)>>(iter: I) -> Self {
        let mut list = Self::new();
        for (domain, policy) in iter {
            list.insert(&domain, policy);
        }
        list
    }
}

/// Normalize a domain key: ASCII lowercase, strip one trailing dot.
pub(crate) fn normalize_domain(domain: &str) -> String {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    domain.to_ascii_lowercase()
}
