//! Collected frontmatter values and their YAML rendering

mod render;

pub use render::render_mapping;

use indexmap::IndexMap;
use serde::Deserialize;

/// Key that receives today's date when the user did not supply one.
pub const DATE_FIELD: &str = "date";

/// Reserved key whose default comes from configuration.
pub const AUTHOR_FIELD: &str = "author";

/// One `{text, url}` pair of a link-list field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Link {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
        }
    }
}

/// A collected field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
    Links(Vec<Link>),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Field values in the order they were collected.
pub type CollectedData = IndexMap<String, FieldValue>;

/// Today's local date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Render collected values as a YAML frontmatter block, without delimiters.
///
/// A `date` entry set to today is appended when the data has none. The input
/// is left untouched.
pub fn format_frontmatter(data: &CollectedData) -> String {
    let needs_date = match data.get(DATE_FIELD) {
        None => true,
        Some(FieldValue::Text(date)) => date.is_empty(),
        Some(_) => false,
    };

    if !needs_date {
        return render_mapping(data).trim_end().to_string();
    }

    let mut with_date = data.clone();
    with_date.insert(DATE_FIELD.to_string(), FieldValue::Text(today_string()));
    render_mapping(&with_date).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(entries: &[(&str, FieldValue)]) -> CollectedData {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    fn is_iso_date(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
    }

    #[test]
    fn today_is_iso_formatted() {
        assert!(is_iso_date(&today_string()));
    }

    #[test]
    fn formats_simple_data() {
        let input = data(&[
            ("title", "Test Article".into()),
            ("author", "John Doe".into()),
        ]);
        let out = format_frontmatter(&input);
        assert!(out.contains("title:"));
        assert!(out.contains("author:"));
    }

    #[test]
    fn injects_date_when_missing() {
        let input = data(&[("title", "Test".into())]);
        let out = format_frontmatter(&input);
        assert!(out.contains(&format!("date: \"{}\"", today_string())));
        assert!(out.ends_with('"'));
    }

    #[test]
    fn injects_date_into_empty_data() {
        let out = format_frontmatter(&CollectedData::new());
        assert_eq!(out, format!("date: \"{}\"", today_string()));
    }

    #[test]
    fn keeps_provided_date() {
        let input = data(&[("title", "Test".into()), ("date", "2025-01-15".into())]);
        let out = format_frontmatter(&input);
        assert!(out.contains("date: \"2025-01-15\""));
        assert_eq!(out.matches("date:").count(), 1);
    }

    #[test]
    fn empty_date_is_replaced() {
        let input = data(&[("date", "".into())]);
        let out = format_frontmatter(&input);
        assert!(out.contains(&today_string()));
    }

    #[test]
    fn does_not_mutate_input() {
        let input = data(&[("title", "Test".into())]);
        let before = input.clone();
        format_frontmatter(&input);
        assert_eq!(input, before);
        assert!(!input.contains_key(DATE_FIELD));
    }

    #[test]
    fn formats_lists_and_links() {
        let input = data(&[
            ("title", "Test".into()),
            (
                "tags",
                FieldValue::List(vec!["react".into(), "typescript".into()]),
            ),
            (
                "links",
                FieldValue::Links(vec![Link::new("GitHub", "https://github.com")]),
            ),
        ]);
        let out = format_frontmatter(&input);
        assert!(out.contains("tags:\n  - react\n  - typescript"));
        assert!(out.contains("links:\n  - text: GitHub\n    url: https://github.com"));
    }

    #[test]
    fn keeps_collection_order() {
        let input = data(&[("title", "My Post".into())]);
        assert_eq!(
            format_frontmatter(&input),
            format!("title: \"My Post\"\ndate: \"{}\"", today_string())
        );
    }

    #[test]
    fn no_trailing_whitespace() {
        let input = data(&[("tags", FieldValue::List(vec!["a".into()]))]);
        let out = format_frontmatter(&input);
        assert_eq!(out, out.trim_end());
    }
}
