//! Error types for chart documentation generation.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while generating documentation for a chart.
#[derive(Debug, Error)]
pub enum HelmDocsError {
    /// A chart file could not be opened or read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chart file is not valid YAML, or has an unexpected shape
    #[error("Failed to parse {}{}: {message}", .path.display(), .line.map(|l| format!(" (line {})", l)).unwrap_or_default())]
    Yaml {
        /// File that failed
        path: PathBuf,
        /// Line of the first error, when the parser reports one
        line: Option<usize>,
        /// Parser message
        message: String,
    },

    /// Template parsing or rendering failed
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Configuration file is missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chart discovery failed
    #[error("Chart discovery failed: {0}")]
    Discovery(String),
}

impl HelmDocsError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Wrap a YAML decode error with the file it came from.
    pub fn yaml(path: impl AsRef<Path>, err: serde_yaml::Error) -> Self {
        Self::Yaml {
            path: path.as_ref().to_path_buf(),
            line: err.location().map(|l| l.line()),
            message: err.to_string(),
        }
    }

    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

/// Result type alias for documentation generation
pub type Result<T> = std::result::Result<T, HelmDocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_detection() {
        let err = HelmDocsError::io(
            "charts/app/values.yaml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());
        assert!(err.to_string().contains("charts/app/values.yaml"));

        let err = HelmDocsError::Config("bad".to_string());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_yaml_error_carries_line() {
        let parse_err = serde_yaml::from_str::<serde_yaml::Value>("a: [1").unwrap_err();
        let err = HelmDocsError::yaml("Chart.yaml", parse_err);
        match &err {
            HelmDocsError::Yaml { line, .. } => assert!(line.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Failed to parse Chart.yaml"));
    }
}
