// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the sample generator.
//!
//! Only the store layer can fail. Classification always produces a label, so
//! nothing in this module describes a classification failure.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for sample generation.
///
/// Errors raised by a configuration store are propagated to the caller
/// unchanged; nothing in the crate retries or recovers from them.
///
/// # Examples
///
/// ```
/// use samplify::domain::errors::SampleError;
///
/// fn open_source() -> Result<(), SampleError> {
///     Err(SampleError::SourceRead {
///         path: "settings.ini".into(),
///         message: "file not found".to_string(),
///         source: None,
///     })
/// }
///
/// assert!(open_source().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SampleError {
    /// The source configuration could not be opened or read.
    #[error("Failed to read configuration '{}': {message}", path.display())]
    SourceRead {
        /// Path of the source configuration
        path: PathBuf,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The configuration text is malformed.
    #[error("Failed to parse configuration at line {line}: {message}")]
    Parse {
        /// One-based line number, or 0 when the whole document is at fault
        line: usize,
        /// The error message
        message: String,
        /// The underlying parsing error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A store could not be turned back into configuration text.
    #[error("Failed to render configuration: {message}")]
    Render {
        /// The error message
        message: String,
        /// The underlying serialization error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The destination could not be created, written or saved.
    #[error("Failed to write configuration '{}': {message}", path.display())]
    DestinationWrite {
        /// Path of the destination configuration
        path: PathBuf,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A store opened read-only was asked to persist itself.
    #[error("Configuration '{}' was opened read-only", path.display())]
    ReadOnlyStore {
        /// Path of the store
        path: PathBuf,
    },

    /// The store was used after its file handle was released.
    #[error("Configuration '{}' is closed", path.display())]
    StoreClosed {
        /// Path of the store
        path: PathBuf,
    },

    /// The requested sample path is the source configuration itself.
    #[error("Sample destination '{}' is the source configuration", path.display())]
    DestinationIsSource {
        /// The offending path
        path: PathBuf,
    },
}

impl SampleError {
    /// Creates a `SourceRead` error wrapping an I/O error.
    pub fn source_read(path: impl Into<PathBuf>, message: &str, err: std::io::Error) -> Self {
        SampleError::SourceRead {
            path: path.into(),
            message: message.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `DestinationWrite` error wrapping an I/O error.
    pub fn destination_write(path: impl Into<PathBuf>, message: &str, err: std::io::Error) -> Self {
        SampleError::DestinationWrite {
            path: path.into(),
            message: message.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `Render` error wrapping a serialization error.
    pub fn render(
        message: &str,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SampleError::Render {
            message: message.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `Parse` error for a specific line.
    pub fn parse_at(line: usize, message: impl Into<String>) -> Self {
        SampleError::Parse {
            line,
            message: message.into(),
            source: None,
        }
    }
}

/// A specialized Result type for sample generation.
pub type Result<T> = std::result::Result<T, SampleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_source_read_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SampleError::source_read("settings.ini", "Failed to open", io_error);
        assert_eq!(
            error.to_string(),
            "Failed to read configuration 'settings.ini': Failed to open"
        );
        assert!(error.source().is_some());
    }

    #[test]
    fn test_parse_error() {
        let error = SampleError::parse_at(7, "expected 'key = value'");
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration at line 7: expected 'key = value'"
        );
        assert!(error.source().is_none());
    }

    #[test]
    fn test_render_error() {
        let fmt_error = std::fmt::Error;
        let error = SampleError::render("Failed to render YAML", fmt_error);
        assert!(error.to_string().starts_with("Failed to render configuration"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_destination_write_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = SampleError::destination_write("/ro/out.sample", "Failed to create", io_error);
        assert!(matches!(error, SampleError::DestinationWrite { .. }));
        assert!(error.to_string().contains("/ro/out.sample"));
    }

    #[test]
    fn test_read_only_store_error() {
        let error = SampleError::ReadOnlyStore {
            path: "settings.ini".into(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration 'settings.ini' was opened read-only"
        );
    }

    #[test]
    fn test_store_closed_error() {
        let error = SampleError::StoreClosed {
            path: "settings.ini".into(),
        };
        assert_eq!(error.to_string(), "Configuration 'settings.ini' is closed");
    }

    #[test]
    fn test_destination_is_source_error() {
        let error = SampleError::DestinationIsSource {
            path: "settings.ini".into(),
        };
        assert!(error.to_string().contains("is the source configuration"));
    }
}
