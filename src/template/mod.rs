//! Markdown templates with an annotated frontmatter block
//!
//! A template is a markdown file whose frontmatter doubles as a schema:
//! section headers mark fields as required or optional, the structure below
//! each key decides its type, and literal values act as prompt defaults.
//!
//! ```text
//! ---
//! # [BLOG] Required fields:
//! title: "My title"
//! date: 2025-01-01
//!
//! # [BLOG] Optional fields:
//! tags:
//!   - rust
//! ---
//! # Body
//! ```

mod defaults;
mod delimiters;
mod fields;

pub use defaults::extract_defaults;
pub use delimiters::{DELIMITER, Delimiters, find_frontmatter_delimiters};
pub use fields::{FieldInfo, FieldKind, parse_field_definitions};

use std::fmt;
use std::path::Path;

use serde_yaml::Mapping;

use crate::error::{self, Result};

/// The kinds of template the tool knows how to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Blog,
    Project,
}

impl TemplateKind {
    /// All kinds, in menu order.
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Blog, TemplateKind::Project];

    /// File name of the template in the working directory.
    pub fn file_name(self) -> &'static str {
        match self {
            TemplateKind::Blog => "BLOG.md",
            TemplateKind::Project => "PROJECT.md",
        }
    }

    /// Human readable label used in the selection menu.
    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Blog => "Blog",
            TemplateKind::Project => "Project",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct TemplateData {
    /// Raw frontmatter text between the delimiters
    pub frontmatter: String,
    /// Everything after the closing delimiter
    pub body: String,
    /// Field schema in document order
    pub fields: Vec<FieldInfo>,
    /// Literal values found in the frontmatter, keyed by field name
    pub defaults: Mapping,
}

impl TemplateData {
    /// Parse template text.
    pub fn parse(content: &str) -> Result<Self> {
        let lines: Vec<&str> = content.split('\n').collect();
        let Delimiters { first, second } = find_frontmatter_delimiters(&lines)?;

        let frontmatter_lines = &lines[first + 1..second];
        let fields = parse_field_definitions(frontmatter_lines);
        let defaults = extract_defaults(frontmatter_lines);

        Ok(Self {
            frontmatter: frontmatter_lines.join("\n"),
            body: lines[second + 1..].join("\n"),
            fields,
            defaults,
        })
    }

    /// Required fields the user is asked about, `date` excluded.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields
            .iter()
            .filter(|f| f.required && f.name != crate::frontmatter::DATE_FIELD)
    }

    /// Optional fields, in document order.
    pub fn optional_fields(&self) -> impl Iterator<Item = &FieldInfo> {
        self.fields.iter().filter(|f| !f.required)
    }
}

/// Read and parse a template file.
pub fn parse_template(path: &Path) -> Result<TemplateData> {
    if !path.is_file() {
        return Err(error::template_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| error::template_read_failed(path.display().to_string(), e.to_string()))?;

    let template = TemplateData::parse(&content)?;
    tracing::debug!(
        path = %path.display(),
        frontmatter_lines = template.frontmatter.lines().count(),
        fields = template.fields.len(),
        "parsed template"
    );
    Ok(template)
}
