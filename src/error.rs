//! Centralized error handling for the panel console
//!
//! The editor and file browser stores never fail; this error type covers the
//! fallible edges around them: persisted state on disk and the remote file
//! service used by the load/save/paste workflows.

use log::warn;
use std::fmt;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Custom Result Type Alias
// ─────────────────────────────────────────────────────────────────────────────

/// A specialized `Result` type for the console.
pub type Result<T> = std::result::Result<T, Error>;

/// The centralized error type for the console.
#[derive(Debug)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Persisted State Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Failed to read a persisted state file
    StateLoad {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to write a persisted state file
    StateSave {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Persisted state is not valid JSON for the expected shape
    StateParse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration directory not found or inaccessible
    ConfigDirNotFound,

    // ─────────────────────────────────────────────────────────────────────────
    // Remote File Service Errors
    // ─────────────────────────────────────────────────────────────────────────
    /// The file service rejected or failed an operation
    Service {
        operation: &'static str,
        message: String,
    },
}

impl Error {
    /// Build a service error for the named operation.
    pub fn service(operation: &'static str, message: impl Into<String>) -> Self {
        Error::Service {
            operation,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::StateParse {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StateLoad { path, source } => {
                write!(
                    f,
                    "Failed to load state from '{}': {}",
                    path.display(),
                    source
                )
            }
            Error::StateSave { path, source } => {
                write!(f, "Failed to save state to '{}': {}", path.display(), source)
            }
            Error::StateParse { message, .. } => {
                write!(f, "Invalid state format: {}", message)
            }
            Error::ConfigDirNotFound => {
                write!(f, "Configuration directory not found")
            }

            Error::Service { operation, message } => {
                write!(f, "File service '{}' failed: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::StateLoad { source, .. } => Some(source.as_ref()),
            Error::StateSave { source, .. } => Some(source.as_ref()),
            Error::StateParse { source, .. } => source
                .as_ref()
                .map(|s| s.as_ref() as &(dyn std::error::Error + 'static)),
            Error::ConfigDirNotFound | Error::Service { .. } => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for Result to support graceful degradation.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_serde_json_error_conversion() {
        let json_result: std::result::Result<String, _> = serde_json::from_str("not json");
        let err = Error::from(json_result.unwrap_err());
        assert!(matches!(err, Error::StateParse { .. }));
    }

    #[test]
    fn test_display_service_error() {
        let err = Error::service("exist", "permission denied");
        assert_eq!(
            err.to_string(),
            "File service 'exist' failed: permission denied"
        );
    }

    #[test]
    fn test_display_state_save() {
        let err = Error::StateSave {
            path: PathBuf::from("/tmp/editor.json"),
            source: Box::new(io::Error::new(io::ErrorKind::Other, "disk full")),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/editor.json"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as StdError;
        let err = Error::StateLoad {
            path: PathBuf::from("/tmp/file.json"),
            source: Box::new(io::Error::new(io::ErrorKind::Other, "x")),
        };
        assert!(err.source().is_some());

        let err = Error::service("copy", "boom");
        assert!(err.source().is_none());
        assert!(Error::ConfigDirNotFound.source().is_none());
    }

    #[test]
    fn test_unwrap_or_warn_default() {
        let ok: Result<i32> = Ok(7);
        assert_eq!(ok.unwrap_or_warn_default(0, "ctx"), 7);

        let err: Result<i32> = Err(Error::ConfigDirNotFound);
        assert_eq!(err.unwrap_or_warn_default(0, "ctx"), 0);
    }
}
