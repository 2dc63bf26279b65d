//! Error types for loading preset options and color data.
//!
//! Generation itself never fails: malformed options are normalized and unknown
//! palette entries are dropped. Errors only surface at the edges, when text is
//! read from disk or deserialized, and when the class pattern for an unusually
//! large palette exceeds the regex size limit.

use std::path::PathBuf;

/// Errors that can occur while loading options or color sources.
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    /// Options document could not be parsed (bad syntax or unknown field).
    #[error("invalid preset options{}: {message}", location(.path))]
    Options {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the deserializer.
        message: String,
    },

    /// Color source document could not be parsed.
    #[error("invalid color source{}: {message}", location(.path))]
    Source {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the deserializer.
        message: String,
    },

    /// The class pattern built from the palette aliases was rejected.
    #[error("invalid class pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PresetError {
    /// Attaches a file path to parse errors that were produced from in-memory text.
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            PresetError::Options { message, .. } => PresetError::Options {
                path: Some(path.into()),
                message,
            },
            PresetError::Source { message, .. } => PresetError::Source {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for preset loading operations.
pub type Result<T> = std::result::Result<T, PresetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_error_display_without_path() {
        let err = PresetError::Options {
            path: None,
            message: "unknown field `colour`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid preset options: unknown field `colour`"
        );
    }

    #[test]
    fn test_with_path_sets_location() {
        let err = PresetError::Source {
            path: None,
            message: "expected map".to_string(),
        }
        .with_path("colors.json");
        let msg = err.to_string();
        assert!(msg.contains("in colors.json"));
        assert!(msg.contains("expected map"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let err = PresetError::Io {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.yaml"));
        assert!(err.source().is_some());
    }
}
