//! Error handling for logbean
//!
//! Assembly returns `LogResult<T>`. The infallible entry points
//! ([`crate::init`], [`crate::global`]) turn an `Err` into a fatal panic.

use std::path::PathBuf;

/// Type alias for Result with [`LogError`] for logging operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger assembly
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// The file sink could not be opened for append
    #[error("failed to open log file '{}': {source}", path.display())]
    Open {
        /// Path that was requested
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Encoding or sink write failed while emitting a record
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogError {
    /// Create a sink-open error for `path`
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Path involved in the failure, if any
    #[must_use]
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Open { path, .. } => Some(path),
            Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_open_error_message() {
        let error = LogError::open(
            "/no/such/dir/app.log",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        let message = error.to_string();
        assert!(message.contains("/no/such/dir/app.log"));
        assert!(message.contains("not found"));
        assert!(error.source().is_some());
        assert_eq!(
            error.path(),
            Some(std::path::Path::new("/no/such/dir/app.log"))
        );
    }

    #[test]
    fn test_io_conversion() {
        let error: LogError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(error, LogError::Io(_)));
        assert!(error.path().is_none());
    }
}
