use thiserror::Error;

/// Classifies preload list errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListErrorKind {
    /// Required path or format not configured
    NotConfigured,
    /// File open/read failure
    FileError,
    /// Data format or decoding error (corrupt file, wrong shape, etc.)
    InvalidData,
}

/// Preload engine error types
#[derive(Error, Debug)]
pub enum PreloadError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("List error: {message}")]
    ListError {
        kind: ListErrorKind,
        message: String,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PreloadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_error_kind_is_matchable() {
        // Consumers should be able to programmatically match error sub-types
        // instead of parsing error message strings.
        let err = PreloadError::ListError {
            kind: ListErrorKind::NotConfigured,
            message: "Preload list path not configured".into(),
        };
        match &err {
            PreloadError::ListError { kind, .. } => {
                assert!(matches!(kind, ListErrorKind::NotConfigured));
            }
            _ => panic!("expected ListError"),
        }
    }

    #[test]
    fn test_list_error_kind_file_error() {
        let err = PreloadError::ListError {
            kind: ListErrorKind::FileError,
            message: "Failed to open file".into(),
        };
        match &err {
            PreloadError::ListError { kind, .. } => {
                assert!(matches!(kind, ListErrorKind::FileError));
            }
            _ => panic!("expected ListError"),
        }
    }

    #[test]
    fn test_list_error_display_includes_message() {
        let err = PreloadError::ListError {
            kind: ListErrorKind::InvalidData,
            message: "Unexpected entry shape".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("Unexpected entry shape"), "got: {}", display);
    }

    #[test]
    fn test_parse_error_at_line_display() {
        let err = PreloadError::ParseErrorAtLine {
            line: 7,
            message: "Invalid table line: example.com yes".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("line 7"), "got: {}", display);
    }
}
