//! Command helper utilities

use std::path::PathBuf;

use crate::error::{self, Result};

/// Resolve the working directory from an optional argument
///
/// If a directory is provided, use it. Otherwise, resolve to the current
/// directory.
pub fn resolve_work_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| error::io_error(format!("Failed to get current directory: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_directory_is_used() {
        let dir = resolve_work_dir(Some(PathBuf::from("/tmp/site"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/site"));
    }

    #[test]
    fn defaults_to_current_directory() {
        let dir = resolve_work_dir(None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }
}
