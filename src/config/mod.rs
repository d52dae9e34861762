//! Runtime configuration
//!
//! Settings come from three layers, later ones winning:
//! - built-in defaults
//! - an optional `create-article.yaml` in the working directory
//! - command line flags and their environment variables

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ArticleError, Result};

/// Config filename looked up in the working directory
pub const CONFIG_FILE: &str = "create-article.yaml";

/// Author offered when nothing else is configured
pub const DEFAULT_AUTHOR: &str = "Brandon Shoop";

/// Folder, relative to the working directory, that receives new articles
pub const ARTICLES_DIR: &str = "articles";

/// Contents of `create-article.yaml`. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub author: Option<String>,
    pub articles_dir: Option<PathBuf>,
}

impl ConfigFile {
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ArticleError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default for the `author` field
    pub default_author: String,
    /// Directory the templates are read from
    pub template_dir: PathBuf,
    /// Directory new articles are written to
    pub articles_dir: PathBuf,
}

impl Config {
    /// Built-in settings rooted at `work_dir`.
    pub fn new(work_dir: &Path) -> Self {
        Self {
            default_author: DEFAULT_AUTHOR.to_string(),
            template_dir: work_dir.to_path_buf(),
            articles_dir: work_dir.join(ARTICLES_DIR),
        }
    }

    /// Load settings for `work_dir`, applying the config file if present and
    /// then an explicit author override.
    pub fn load(work_dir: &Path, author: Option<String>) -> Result<Self> {
        let mut config = Self::new(work_dir);

        let path = work_dir.join(CONFIG_FILE);
        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| ArticleError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            config.apply(ConfigFile::from_yaml(&path, &content)?);
            tracing::debug!(path = %path.display(), "loaded configuration file");
        }

        if let Some(author) = author.filter(|a| !a.trim().is_empty()) {
            config.default_author = author;
        }

        Ok(config)
    }

    fn apply(&mut self, file: ConfigFile) {
        if let Some(author) = file.author {
            self.default_author = author;
        }
        if let Some(dir) = file.articles_dir {
            self.articles_dir = self.template_dir.join(dir);
        }
    }
}
