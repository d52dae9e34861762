//! YAML emitter for flat frontmatter.
//!
//! Frontmatter here is only ever a mapping of strings, string lists and link
//! lists, so it is written directly: `serde_yaml::to_string` never quotes
//! `My Post` or a date, and new articles must read `title: "My Post"` and
//! `date: "2025-01-01"`. Strings stay plain unless they contain whitespace or
//! plain text would read back as something else; those are double-quoted.

use std::fmt::Write as _;

use serde_yaml::Value;

use super::{CollectedData, FieldValue, Link};

/// Column at which long single-line strings are folded.
pub const LINE_WIDTH: usize = 80;

const INDENT: &str = "  ";

/// Characters that change the meaning of a plain scalar when they lead it.
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@',
    '`',
];

/// YAML 1.1 booleans that modern parsers read as strings but older ones do not.
const LEGACY_BOOLEANS: &[&str] = &["y", "n", "yes", "no", "on", "off"];

fn looks_like_date(s: &str) -> bool {
    let mut parts = s.splitn(3, '-');
    let (Some(year), Some(month), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let day: String = rest.chars().take_while(char::is_ascii_digit).collect();
    year.len() == 4
        && year.chars().all(|c| c.is_ascii_digit())
        && (1..=2).contains(&month.len())
        && month.chars().all(|c| c.is_ascii_digit())
        && (1..=2).contains(&day.len())
}

fn reads_back_as_string(s: &str) -> bool {
    matches!(serde_yaml::from_str::<Value>(s), Ok(Value::String(parsed)) if parsed == s)
}

/// Whether a string has to be double-quoted to survive a YAML round trip.
///
/// Strings containing whitespace are quoted as well, so titles and names
/// always appear as `"My Post"`.
pub fn needs_quotes(s: &str) -> bool {
    if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return true;
    }
    if s.starts_with(INDICATORS) || s.ends_with(':') || s.contains(": ") || s.contains(" #") {
        return true;
    }
    if LEGACY_BOOLEANS.contains(&s.to_ascii_lowercase().as_str()) || looks_like_date(s) {
        return true;
    }
    !reads_back_as_string(s)
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render a string as a single-line YAML scalar.
fn scalar(s: &str) -> String {
    if needs_quotes(s) { quote(s) } else { s.to_string() }
}

/// Whether a string can be written as a folded block without changing it.
fn can_fold(s: &str) -> bool {
    s.contains(' ')
        && !s.contains("  ")
        && s == s.trim()
        && !s.chars().any(char::is_control)
}

/// Greedily wrap words so each line, indented, fits within [`LINE_WIDTH`].
fn wrap_words(s: &str, indent: usize) -> Vec<String> {
    let width = LINE_WIDTH.saturating_sub(indent);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in s.split(' ') {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn write_text(out: &mut String, key: &str, value: &str) {
    let key = scalar(key);
    let inline = scalar(value);

    if key.len() + 2 + inline.len() > LINE_WIDTH && can_fold(value) {
        let _ = writeln!(out, "{key}: >-");
        for line in wrap_words(value, INDENT.len()) {
            let _ = writeln!(out, "{INDENT}{line}");
        }
        return;
    }

    let _ = writeln!(out, "{key}: {inline}");
}

fn write_list(out: &mut String, key: &str, items: &[String]) {
    let key = scalar(key);
    if items.is_empty() {
        let _ = writeln!(out, "{key}: []");
        return;
    }
    let _ = writeln!(out, "{key}:");
    for item in items {
        let _ = writeln!(out, "{INDENT}- {}", scalar(item));
    }
}

fn write_links(out: &mut String, key: &str, links: &[Link]) {
    let key = scalar(key);
    if links.is_empty() {
        let _ = writeln!(out, "{key}: []");
        return;
    }
    let _ = writeln!(out, "{key}:");
    for link in links {
        let _ = writeln!(out, "{INDENT}- text: {}", scalar(&link.text));
        let _ = writeln!(out, "{INDENT}  url: {}", scalar(&link.url));
    }
}

/// Render every entry as block-style YAML, one key per line.
pub fn render_mapping(data: &CollectedData) -> String {
    let mut out = String::new();
    for (key, value) in data {
        match value {
            FieldValue::Text(text) => write_text(&mut out, key, text),
            FieldValue::List(items) => write_list(&mut out, key, items),
            FieldValue::Links(links) => write_links(&mut out, key, links),
        }
    }
    out
}
