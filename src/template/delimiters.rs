//! Locating the `---` lines that bound a frontmatter block.

use crate::error::{ArticleError, Result};

/// The marker line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Zero-based line indices of the opening and closing delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub first: usize,
    pub second: usize,
}

/// Find the first two lines whose trimmed content is `---`.
pub fn find_frontmatter_delimiters<S: AsRef<str>>(lines: &[S]) -> Result<Delimiters> {
    let is_delimiter = |line: &S| line.as_ref().trim() == DELIMITER;

    let first = lines
        .iter()
        .position(is_delimiter)
        .ok_or(ArticleError::MissingOpeningDelimiter)?;

    let second = lines[first + 1..]
        .iter()
        .position(is_delimiter)
        .map(|offset| first + 1 + offset)
        .ok_or(ArticleError::MissingClosingDelimiter)?;

    Ok(Delimiters { first, second })
}
