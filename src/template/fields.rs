//! Field descriptors inferred from a template's frontmatter lines.
//!
//! Templates mark their fields with section headers such as
//! `# [BLOG] Required fields:` and `# [BLOG] Optional fields:`. Every
//! `key:` declaration under a header becomes a [`FieldInfo`]; declarations
//! that appear before any header are not part of the schema and are skipped.

/// Field name that always holds a list of links.
pub const LINKS_FIELD: &str = "links";

const SECTION_MARKER: &str = "# [";
const REQUIRED_HEADER: &str = "] Required fields:";
const OPTIONAL_HEADER: &str = "] Optional fields:";

/// Storage shape of a field, fixed when the template is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A single string value
    Scalar,
    /// A list of strings
    List,
    /// A list of `{text, url}` pairs
    LinkList,
}

/// One field of the template schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub required: bool,
    pub kind: FieldKind,
}

/// Which header the scan is currently under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Required,
    Optional,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        if !line.contains(SECTION_MARKER) {
            return None;
        }
        if line.contains(REQUIRED_HEADER) {
            Some(Section::Required)
        } else if line.contains(OPTIONAL_HEADER) {
            Some(Section::Optional)
        } else {
            None
        }
    }
}

/// Classify a field by the first non-blank line after its declaration.
///
/// Only that one line is looked at: a list separated from its key by a blank
/// line still counts, but anything after the first non-blank line does not.
pub fn infer_field_kind<S: AsRef<str>>(name: &str, lines: &[S], index: usize) -> FieldKind {
    if name == LINKS_FIELD {
        return FieldKind::LinkList;
    }

    let next = lines
        .iter()
        .skip(index + 1)
        .map(|line| line.as_ref().trim())
        .find(|line| !line.is_empty());

    match next {
        Some(line) if line.starts_with('-') => {
            if line.contains("text:") && line.contains("url:") {
                FieldKind::LinkList
            } else {
                FieldKind::List
            }
        }
        _ => FieldKind::Scalar,
    }
}

/// Return the key of a `key:` declaration line, if the line is one.
///
/// A key is a run of ASCII letters, digits or underscores, optionally
/// indented, immediately followed by a colon.
pub fn declared_key(line: &str) -> Option<&str> {
    let rest = line.trim_start();
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 || !rest[end..].starts_with(':') {
        return None;
    }
    Some(&rest[..end])
}

/// Scan frontmatter lines and emit field descriptors in document order.
pub fn parse_field_definitions<S: AsRef<str>>(lines: &[S]) -> Vec<FieldInfo> {
    let mut fields = Vec::new();
    let mut section: Option<Section> = None;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        if let Some(header) = Section::from_header(line) {
            section = Some(header);
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (Some(current), Some(name)) = (section, declared_key(line)) else {
            continue;
        };

        fields.push(FieldInfo {
            name: name.to_string(),
            required: current == Section::Required,
            kind: infer_field_kind(name, lines, index),
        });
    }

    fields
}
