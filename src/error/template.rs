//! Template structure errors

use super::ArticleError;

/// Creates a template-not-found error
pub fn not_found(path: impl Into<String>) -> ArticleError {
    ArticleError::TemplateNotFound { path: path.into() }
}

/// Creates a template-read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ArticleError {
    ArticleError::TemplateReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
