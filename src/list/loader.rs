use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{ListErrorKind, PreloadError, Result};
use crate::types::{PreloadList, SubdomainPolicy};

use super::format::ListFormat;
use super::{json, text};

/// Trait for loading the HSTS preload table
pub trait PreloadLoader: Send + Sync {
    /// Load the preload table.
    ///
    /// Idempotent: repeated calls return logically identical data.
    /// Implementations should cache the parsed table.
    fn load(&self) -> Result<PreloadList>;
}

/// File-based loader with format auto-detection
pub struct FileListLoader {
    path: Option<PathBuf>,
    format: Option<ListFormat>,

    // Cached table after the first successful parse
    cached: RwLock<Option<PreloadList>>,
}

impl FileListLoader {
    /// Create a new FileListLoader
    pub fn new() -> Self {
        Self {
            path: None,
            format: None,
            cached: RwLock::new(None),
        }
    }

    /// Set the list file path
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set explicit list format (overrides auto-detection)
    pub fn with_format(mut self, format: ListFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Get list format (explicit or detected from path)
    fn get_format(&self) -> Option<ListFormat> {
        self.format
            .or_else(|| self.path.as_ref().and_then(ListFormat::detect))
    }

    /// Load and cache the table
    fn ensure_loaded(&self) -> Result<()> {
        if self.cached.read().unwrap().is_some() {
            return Ok(());
        }

        let path = self.path.as_ref().ok_or_else(|| PreloadError::ListError {
            kind: ListErrorKind::NotConfigured,
            message: "Preload list path not configured".to_string(),
        })?;

        let format = self.get_format().ok_or_else(|| PreloadError::ListError {
            kind: ListErrorKind::NotConfigured,
            message: format!("Cannot detect preload list format: {}", path.display()),
        })?;

        let list = match format {
            ListFormat::Json => json::load_list(path)?,
            ListFormat::Text => text::load_list(path)?,
        };

        debug!(entries = list.len(), path = %path.display(), "loaded preload list");

        *self.cached.write().unwrap() = Some(list);
        Ok(())
    }
}

impl Default for FileListLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PreloadLoader for FileListLoader {
    fn load(&self) -> Result<PreloadList> {
        self.ensure_loaded()?;
        let guard = self.cached.read().unwrap();
        Ok(guard.as_ref().unwrap().clone())
    }
}

/// In-memory loader for tests and embedders that build the table
/// programmatically
pub struct MemoryListLoader {
    list: PreloadList,
}

impl MemoryListLoader {
    pub fn new() -> Self {
        Self {
            list: PreloadList::new(),
        }
    }

    /// Add a domain with its policy
    pub fn add(&mut self, domain: &str, policy: SubdomainPolicy) {
        self.list.insert(domain, policy);
    }
}

impl Default for MemoryListLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl PreloadLoader for MemoryListLoader {
    fn load(&self) -> Result<PreloadList> {
        Ok(self.list.clone())
    }
}

/// Nil loader - returns an error for every load
pub struct NilListLoader;

impl PreloadLoader for NilListLoader {
    fn load(&self) -> Result<PreloadList> {
        Err(PreloadError::ListError {
            kind: ListErrorKind::NotConfigured,
            message: "Preload list not available".to_string(),
        })
    }
}
