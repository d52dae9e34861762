//! Converting answers and template defaults into field values.

use serde_yaml::Value;

use crate::frontmatter::{FieldValue, Link};
use crate::template::FieldKind;

/// Separator used when showing list and link defaults in a prompt.
const DISPLAY_SEPARATOR: &str = ", ";

/// Stringify a YAML value the way it would read in a prompt.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Mapping(_) => serde_yaml::to_string(value)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
        Value::Tagged(tagged) => value_to_string(&tagged.value),
    }
}

/// Split a comma-separated answer into trimmed, non-empty items.
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `text:url,text:url` into links.
///
/// Each pair is split at its first colon so URLs keep their own colons.
/// Pairs without a colon, or with an empty side, are dropped.
pub fn parse_links(input: &str) -> Vec<Link> {
    input
        .split(',')
        .map(str::trim)
        .filter_map(|pair| {
            let (text, url) = pair.split_once(':')?;
            let (text, url) = (text.trim(), url.trim());
            (!text.is_empty() && !url.is_empty()).then(|| Link::new(text, url))
        })
        .collect()
}

/// Convert a non-empty answer into the field's storage shape.
pub fn coerce_input(kind: FieldKind, input: &str) -> FieldValue {
    match kind {
        FieldKind::Scalar => FieldValue::Text(input.to_string()),
        FieldKind::List => FieldValue::List(parse_list(input)),
        FieldKind::LinkList => FieldValue::Links(parse_links(input)),
    }
}

/// Convert a template default into the field's storage shape.
///
/// A link-list default that is not a list of `{text, url}` mappings becomes an
/// empty list.
pub fn coerce_default(kind: FieldKind, value: &Value) -> FieldValue {
    match kind {
        FieldKind::Scalar => FieldValue::Text(value_to_string(value)),
        FieldKind::List => match value {
            Value::Sequence(items) => FieldValue::List(items.iter().map(value_to_string).collect()),
            other => FieldValue::List(parse_list(&value_to_string(other))),
        },
        FieldKind::LinkList => {
            FieldValue::Links(serde_yaml::from_value(value.clone()).unwrap_or_default())
        }
    }
}

/// Render a template default for display in a prompt.
pub fn display_default(kind: FieldKind, value: &Value) -> String {
    match (kind, value) {
        (FieldKind::List, Value::Sequence(items)) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(DISPLAY_SEPARATOR),
        (FieldKind::LinkList, Value::Sequence(items)) => items
            .iter()
            .map(|item| {
                format!(
                    "{}:{}",
                    value_to_string(&item["text"]),
                    value_to_string(&item["url"])
                )
            })
            .collect::<Vec<_>>()
            .join(DISPLAY_SEPARATOR),
        _ => value_to_string(value),
    }
}
