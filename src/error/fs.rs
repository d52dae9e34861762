//! File system errors

use super::ArticleError;

/// Creates a write error for a path
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ArticleError {
    ArticleError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> ArticleError {
    ArticleError::IoError {
        message: message.into(),
    }
}
