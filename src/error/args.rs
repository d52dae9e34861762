//! Command line argument errors

use super::ArticleError;

/// Creates an error for a value flag given without a value
pub fn missing_value(flag: impl Into<String>) -> ArticleError {
    ArticleError::MissingArgumentValue { flag: flag.into() }
}

/// Creates an error for an unrecognised template type
pub fn invalid_type(value: impl Into<String>) -> ArticleError {
    ArticleError::InvalidTemplateType {
        value: value.into(),
    }
}
