//! Interactive collection of frontmatter values
//!
//! The collector walks the template's fields (required ones first, `date`
//! excluded since it is filled in when formatting), asks for each one and
//! stores the answer in the field's storage shape. Pressing Enter accepts the
//! default; a required field without a default is asked again.

pub mod coerce;
pub mod prompt;

pub use prompt::{HeadlessPrompter, LinePrompter, Prompter, TerminalPrompter};

use serde_yaml::{Mapping, Value};

use crate::error::{ArticleError, Result};
use crate::frontmatter::{AUTHOR_FIELD, CollectedData};
use crate::template::{FieldInfo, FieldKind, TemplateData};
use coerce::{coerce_default, coerce_input, display_default};

const REQUIRED_NOTICE: &str = "This field is required. Please provide a value.";

/// Build the prompt shown for a field.
pub fn prompt_text(field: &FieldInfo, default: Option<&str>) -> String {
    let mut text = field.name.clone();
    text.push_str(if field.required {
        " (required)"
    } else {
        " (optional, press Enter to skip)"
    });

    if let Some(default) = default.filter(|d| !d.is_empty()) {
        text.push_str(&format!(" [default: {default}]"));
    }

    text.push_str(match field.kind {
        FieldKind::List => " - comma-separated values: ",
        FieldKind::LinkList => " - format: \"text:url,text:url\": ",
        FieldKind::Scalar => ": ",
    });
    text
}

/// Asks for field values through a [`Prompter`].
pub struct Collector<'a, P: Prompter + ?Sized> {
    prompter: &'a mut P,
    defaults: &'a Mapping,
    author: &'a str,
}

impl<'a, P: Prompter + ?Sized> Collector<'a, P> {
    /// `author` is the default offered for the reserved `author` field.
    pub fn new(prompter: &'a mut P, defaults: &'a Mapping, author: &'a str) -> Self {
        Self {
            prompter,
            defaults,
            author,
        }
    }

    /// The raw default for a field, if any.
    fn default_for(&self, field: &FieldInfo) -> Option<Value> {
        if field.name == AUTHOR_FIELD {
            return Some(Value::String(self.author.to_string()));
        }
        self.defaults.get(field.name.as_str()).cloned()
    }

    /// Ask for a single field and record the answer in `data`.
    pub fn prompt_field(&mut self, field: &FieldInfo, data: &mut CollectedData) -> Result<()> {
        let default = self.default_for(field);
        let shown = default.as_ref().map(|v| display_default(field.kind, v));
        let prompt = prompt_text(field, shown.as_deref());

        loop {
            let answer = self.prompter.read_line(&prompt)?;
            let answer = answer.trim();

            if !answer.is_empty() {
                data.insert(field.name.clone(), coerce_input(field.kind, answer));
                return Ok(());
            }

            if let Some(value) = &default {
                data.insert(field.name.clone(), coerce_default(field.kind, value));
                return Ok(());
            }

            if !field.required {
                return Ok(());
            }

            if !self.prompter.is_interactive() {
                return Err(ArticleError::MissingRequiredField {
                    field: field.name.clone(),
                });
            }
            self.prompter.notice(REQUIRED_NOTICE);
        }
    }

    /// Ask for every field of the template in collection order.
    pub fn collect(&mut self, template: &TemplateData) -> Result<CollectedData> {
        let mut data = CollectedData::new();

        for field in template.required_fields() {
            self.prompt_field(field, &mut data)?;
        }
        for field in template.optional_fields() {
            self.prompt_field(field, &mut data)?;
        }

        tracing::debug!(fields = data.len(), "collected frontmatter values");
        Ok(data)
    }
}
