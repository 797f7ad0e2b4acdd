//! Error types for docdex

use thiserror::Error;

/// docdex error type
#[derive(Error, Debug)]
pub enum Error {
    /// Path resolves outside the document root
    #[error("Access denied: {0} is outside the document root")]
    AccessDenied(String),

    /// Document not found on disk or in the index
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Per-file decode failure; the loader logs and skips these
    #[error("Failed to decode {path}: {reason}")]
    Decode { path: String, reason: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Io(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NotFound("guides/bgp.md".to_string());
        assert_eq!(err.to_string(), "Document not found: guides/bgp.md");
    }

    #[test]
    fn test_access_denied_display() {
        let err = Error::AccessDenied("../secret".to_string());
        assert!(err.to_string().contains("outside the document root"));
    }
}
