//! Naming and writing the generated article

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{self, Result};
use crate::template::DELIMITER;

/// Extension given to every article
pub const EXTENSION: &str = ".md";

/// Characters that are not allowed in file names on common platforms.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace every character that is invalid in a file name with `-`.
pub fn sanitize_filename(name: &str) -> String {
    name.replace(INVALID_FILENAME_CHARS, "-")
}

/// Pick the file name for `base_name` inside `dir`.
///
/// `.md` is appended when missing. If that file already exists, the current
/// Unix time in seconds is inserted before the extension.
pub fn generate_filename(base_name: &str, dir: &Path) -> String {
    let stem = base_name.strip_suffix(EXTENSION).unwrap_or(base_name);
    let filename = format!("{stem}{EXTENSION}");

    if !dir.join(&filename).exists() {
        return filename;
    }

    let epoch = chrono::Utc::now().timestamp();
    let filename = format!("{stem}-{epoch}{EXTENSION}");
    tracing::warn!("File already exists. Using filename: {filename}");
    filename
}

/// Assemble the article text from rendered frontmatter and the template body.
pub fn compose_article(frontmatter: &str, body: &str) -> String {
    format!("{DELIMITER}\n{frontmatter}\n{DELIMITER}\n{body}")
}

/// Write a new article into `dir`, creating the directory if needed.
///
/// Returns the path of the written file. An existing file is never replaced.
pub fn write_article(dir: &Path, name: &str, frontmatter: &str, body: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .map_err(|e| error::file_write_failed(dir.display().to_string(), e.to_string()))?;

    let path = dir.join(generate_filename(name, dir));
    let content = compose_article(frontmatter, body);

    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .and_then(|mut file| file.write_all(content.as_bytes()))
        .map_err(|e| error::file_write_failed(path.display().to_string(), e.to_string()))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote article");
    Ok(path)
}
