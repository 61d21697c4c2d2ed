use std::path::Path;

/// Preload list file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Chromium `transport_security_state_static.json` format
    Json,
    /// Plain `domain flag` text format
    Text,
}

impl ListFormat {
    /// Detect format from file extension
    pub fn detect(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(ListFormat::Json),
            "txt" | "list" => Some(ListFormat::Text),
            _ => None,
        }
    }
}
