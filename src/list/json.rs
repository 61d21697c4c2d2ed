//! Chromium preload list format (`transport_security_state_static.json`).
//!
//! The upstream file is JSON with `//` comment lines. Only entries with
//! `"mode": "force-https"` carry an upgrade mark; `include_subdomains`
//! selects the policy.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ListErrorKind, PreloadError, Result};
use crate::types::{PreloadList, SubdomainPolicy};

#[derive(Debug, Deserialize)]
struct RawList {
    #[serde(default)]
    entries: Vec<RawEntry>,
}

/// A single upstream entry. Unknown fields (pinning, expect-ct, etc.)
/// are ignored.
#[derive(Debug, Deserialize)]
struct RawEntry {
    name: String,
    #[serde(default)]
    mode: Option<String>,
    #[serde(default)]
    include_subdomains: bool,
}

/// Load a preload table from a Chromium-format JSON file.
pub fn load_list(path: impl AsRef<Path>) -> Result<PreloadList> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PreloadError::ListError {
        kind: ListErrorKind::FileError,
        message: format!("Failed to read preload list '{}': {}", path.display(), e),
    })?;
    parse_list(&text)
}

/// Parse a preload table from Chromium-format JSON text.
pub fn parse_list(text: &str) -> Result<PreloadList> {
    let stripped = strip_comments(text);
    let raw: RawList = serde_json::from_str(&stripped)?;

    let mut list = PreloadList::new();
    for entry in raw.entries {
        if entry.mode.as_deref() != Some("force-https") {
            continue;
        }
        let policy = if entry.include_subdomains {
            SubdomainPolicy::Include
        } else {
            SubdomainPolicy::ExactOnly
        };
        list.insert(&entry.name, policy);
    }

    Ok(list)
}

/// Drop `//` comment lines. The upstream file only uses full-line
/// comments, never trailing ones, so filtering whole lines is safe.
fn strip_comments(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}
