//! Common test utilities for create-article integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Blog template used by most tests
#[allow(dead_code)]
pub const BLOG_TEMPLATE: &str = "---
# [BLOG] Required fields:
title: \"X\"
date: 2025-01-01
---
# Hello";

/// Project template with optional list and link fields
#[allow(dead_code)]
pub const PROJECT_TEMPLATE: &str = "---
# [PROJECT] Required fields:
title: \"Portfolio Site\"
date: 2025-01-01
author: Someone

# [PROJECT] Optional fields:
tags:
  - rust
  - cli
links: [{ text: GitHub, url: \"https://github.com/example\" }]
excerpt:
---

# Project

Write about it here.
";

/// A temporary working directory for one run of the binary
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create an empty workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace holding `BLOG.md`
    #[allow(dead_code)]
    pub fn with_blog() -> Self {
        let workspace = Self::new();
        workspace.write_file("BLOG.md", BLOG_TEMPLATE);
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Names of the files written to `articles/`, sorted
    #[allow(dead_code)]
    pub fn articles(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.path.join("articles")) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| {
                entry
                    .expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// The binary, running inside this workspace with a clean environment
    #[allow(deprecated, dead_code)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("create-article").expect("binary should be built");
        cmd.current_dir(&self.path)
            .env_remove("CREATE_ARTICLE_AUTHOR")
            .env_remove("CREATE_ARTICLE_DIR")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Today's date the way it is written into new articles
#[allow(dead_code)]
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
