//! Error types for Ridge output

use thiserror::Error;

/// Main error type for Ridge operations
#[derive(Error, Debug)]
pub enum RidgeError {
    /// The output sink rejected the message
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),
}

/// Result type alias for Ridge operations
pub type Result<T> = std::result::Result<T, RidgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_write_error_display() {
        let err = RidgeError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.to_string(), "Write error: pipe closed");
    }

    #[test]
    fn test_write_error_keeps_kind() {
        let err: RidgeError = io::Error::from(io::ErrorKind::WriteZero).into();
        match err {
            RidgeError::Write(inner) => assert_eq!(inner.kind(), io::ErrorKind::WriteZero),
        }
    }
}
