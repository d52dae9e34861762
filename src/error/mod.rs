//! Error types and handling for create-article
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`template`]: Template structure errors
//! - [`args`]: Command line argument errors
//! - [`fs`]: File system errors

pub mod args;
pub mod fs;
pub mod template;

pub use args::{invalid_type, missing_value};
pub use fs::{io_error, write_failed as file_write_failed};
pub use template::{not_found as template_not_found, read_failed as template_read_failed};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for create-article operations
#[derive(Error, Diagnostic, Debug)]
pub enum ArticleError {
    // Template errors
    #[error("Template file not found: {path}")]
    #[diagnostic(
        code(create_article::template::not_found),
        help("Run the command from the directory that contains BLOG.md or PROJECT.md")
    )]
    TemplateNotFound { path: String },

    #[error("Failed to read template file: {path}: {reason}")]
    #[diagnostic(code(create_article::template::read_failed))]
    TemplateReadFailed { path: String, reason: String },

    #[error("Template file does not contain frontmatter delimiters (---)")]
    #[diagnostic(
        code(create_article::template::missing_opening_delimiter),
        help("Start the template with a line containing only ---")
    )]
    MissingOpeningDelimiter,

    #[error("Template file does not contain closing frontmatter delimiter (---)")]
    #[diagnostic(
        code(create_article::template::missing_closing_delimiter),
        help("End the frontmatter block with a line containing only ---")
    )]
    MissingClosingDelimiter,

    // Argument errors
    #[error("Invalid type: {value}. Must be 'blog' or 'project'.")]
    #[diagnostic(code(create_article::args::invalid_type))]
    InvalidTemplateType { value: String },

    #[error("Missing value for {flag}")]
    #[diagnostic(code(create_article::args::missing_value))]
    MissingArgumentValue { flag: String },

    #[error("{flag} is required in headless mode")]
    #[diagnostic(
        code(create_article::args::headless_missing),
        help("Pass both --type and --name when using --headless")
    )]
    HeadlessMissingArgument { flag: String },

    #[error("Filename cannot be empty.")]
    #[diagnostic(code(create_article::args::empty_filename))]
    EmptyFilename,

    // Collection errors
    #[error("Required field '{field}' has no value and no default")]
    #[diagnostic(
        code(create_article::collect::missing_required),
        help("Give the field a default value in the template, or run without --headless")
    )]
    MissingRequiredField { field: String },

    #[error("Input cancelled")]
    #[diagnostic(code(create_article::collect::interrupted))]
    Interrupted,

    // Configuration errors
    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(create_article::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(create_article::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(create_article::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(create_article::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ArticleError {
    fn from(err: std::io::Error) -> Self {
        ArticleError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for ArticleError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationInterrupted
            | inquire::InquireError::OperationCanceled => ArticleError::Interrupted,
            inquire::InquireError::IO(e) => e.into(),
            other => ArticleError::IoError {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ArticleError>;
