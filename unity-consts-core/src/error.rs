//! Error types for constant generation

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, ConstGenError>;

/// Main error type for the extraction pipeline
#[derive(Error, Debug)]
pub enum ConstGenError {
    /// A file or directory could not be read
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file was read but its markup could not be decoded
    #[error("Failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// Rendering the generated source failed
    #[error("Emit error: {0}")]
    Emit(String),
}

impl ConstGenError {
    /// Create an IO error for a path
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a decode error for a path
    pub fn decode<P: AsRef<Path>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Decode {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create an emit error
    pub fn emit<S: Into<String>>(message: S) -> Self {
        Self::Emit(message.into())
    }

    /// Whether the run can continue after this error.
    ///
    /// Unreadable files are skipped; malformed assets and emit failures stop
    /// generation.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ConstGenError::decode("Assets/Main.unity", "bad indentation");
        assert!(matches!(err, ConstGenError::Decode { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_io_is_recoverable() {
        let err = ConstGenError::io(
            "ProjectSettings/TagManager.asset",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = ConstGenError::decode("Assets/Enemy.prefab", "mapping values are not allowed");
        let msg = format!("{}", err);
        assert!(msg.contains("Enemy.prefab"));
        assert!(msg.contains("mapping values"));
    }
}
