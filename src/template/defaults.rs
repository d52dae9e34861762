//! Default values read from the template's own frontmatter.

use serde_yaml::{Mapping, Value};

/// Keep only the frontmatter lines that carry YAML content.
///
/// Section headers, blank lines and bare `#` lines are dropped. Other comment
/// lines are kept because the YAML parser skips them anyway.
pub fn clean_frontmatter<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| {
            let trimmed = line.trim();
            !(trimmed.is_empty() || trimmed == "#" || trimmed.starts_with("# ["))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether a value is a `<PLACEHOLDER>` rather than a real default.
fn is_placeholder(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.len() > 2 && s.starts_with('<') && s.ends_with('>'))
}

/// Parse default values out of the frontmatter lines.
///
/// A malformed block is not fatal: a warning is logged and no defaults are
/// returned.
pub fn extract_defaults<S: AsRef<str>>(lines: &[S]) -> Mapping {
    let cleaned = clean_frontmatter(lines);

    let parsed: Value = match serde_yaml::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Could not parse defaults from template: {e}");
            return Mapping::new();
        }
    };

    let Value::Mapping(mut mapping) = parsed else {
        return Mapping::new();
    };

    mapping.retain(|_, value| !value.is_null() && !is_placeholder(value));
    mapping
}
