//! Plain text preload table format.
//!
//! One `domain flag` pair per line. Flag `1` marks the domain and all of
//! its subdomains, `0` marks the exact domain only. `#` starts a comment,
//! full-line or trailing. Blank lines are skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ListErrorKind, PreloadError, Result};
use crate::types::{PreloadList, SubdomainPolicy};

/// Regex pattern for table lines: `domain<whitespace>flag`
static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9](?:[A-Za-z0-9.\-]*[A-Za-z0-9])?\.?)\s+([01])$")
        .expect("LINE_PATTERN: hardcoded regex is invalid")
});

/// Load a preload table from a text file.
pub fn load_list(path: impl AsRef<Path>) -> Result<PreloadList> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PreloadError::ListError {
        kind: ListErrorKind::FileError,
        message: format!("Failed to read preload list '{}': {}", path.display(), e),
    })?;
    parse_list(&text)
}

/// Parse a preload table from text.
pub fn parse_list(text: &str) -> Result<PreloadList> {
    let mut list = PreloadList::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = if let Some(comment_pos) = line.find('#') {
            &line[..comment_pos]
        } else {
            line
        };
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        let captures = LINE_PATTERN
            .captures(line)
            .ok_or_else(|| PreloadError::ParseErrorAtLine {
                line: line_num,
                message: format!("Invalid table line: {}", line),
            })?;

        let domain = captures.get(1).unwrap().as_str();
        let policy = match captures.get(2).unwrap().as_str() {
            "1" => SubdomainPolicy::Include,
            _ => SubdomainPolicy::ExactOnly,
        };
        list.insert(domain, policy);
    }

    Ok(list)
}
