//! Prompt back-ends: terminal, plain line input and headless.

use std::io::{BufRead, Write};

use console::Style;
use inquire::{Select, Text};

use crate::error::{ArticleError, Result};

/// Source of answers for the collector and the setup questions.
pub trait Prompter {
    /// Show `prompt` and return one line of input, without the newline.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Let the user pick one of `options`; returns its index.
    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<usize>;

    /// Show an informational message.
    fn notice(&mut self, message: &str);

    /// Whether a person is answering. Non-interactive prompters never get a
    /// second chance at a required field.
    fn is_interactive(&self) -> bool {
        true
    }
}

/// Prompts rendered with `inquire` on an attended terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let prompt = prompt.trim_end().trim_end_matches(':');
        Ok(Text::new(prompt).prompt()?)
    }

    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<usize> {
        let choice = Select::new(prompt, options.to_vec())
            .with_starting_cursor(0)
            .without_filtering()
            .with_help_message("↑↓ to move, ENTER to select, ESC to cancel")
            .raw_prompt()?;
        Ok(choice.index)
    }

    fn notice(&mut self, message: &str) {
        println!("{}", Style::new().yellow().apply_to(message));
    }
}

/// Plain line-based prompts over any reader and writer.
///
/// Used when stdin is piped. End of input counts as an interrupt.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning what was written to its output.
    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

fn choice_hint(count: usize) -> String {
    let numbers: Vec<String> = (1..=count).map(|n| n.to_string()).collect();
    match numbers.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {last}", rest.join(", ")),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ArticleError::Interrupted);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn select(&mut self, prompt: &str, options: &[&str]) -> Result<usize> {
        writeln!(self.output, "\n{prompt}")?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {option}", i + 1)?;
        }

        let hint = choice_hint(options.len());
        loop {
            let answer = self.read_line(&format!("Enter choice ({hint}): "))?;
            match answer.trim().parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => self.notice(&format!("Invalid choice. Please enter {hint}.")),
            }
        }
    }

    fn notice(&mut self, message: &str) {
        let _ = writeln!(self.output, "{message}");
    }
}

/// Answers every question with an empty line, so only defaults are used.
#[derive(Debug, Default)]
pub struct HeadlessPrompter;

impl Prompter for HeadlessPrompter {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        Ok(String::new())
    }

    fn select(&mut self, _prompt: &str, _options: &[&str]) -> Result<usize> {
        Err(ArticleError::HeadlessMissingArgument {
            flag: "--type".to_string(),
        })
    }

    fn notice(&mut self, message: &str) {
        tracing::debug!("{message}");
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_one_line_per_prompt() {
        let mut p = prompter("first\r\nsecond\n");
        assert_eq!(p.read_line("a: ").unwrap(), "first");
        assert_eq!(p.read_line("b: ").unwrap(), "second");
        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, "a: b: ");
    }

    #[test]
    fn end_of_input_is_an_interrupt() {
        let mut p = prompter("");
        assert!(matches!(p.read_line("a: "), Err(ArticleError::Interrupted)));
    }

    #[test]
    fn select_repeats_until_valid() {
        let mut p = prompter("3\nx\n2\n");
        assert_eq!(p.select("Select template type:", &["Blog", "Project"]).unwrap(), 1);
        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("1. Blog\n2. Project\n"));
        assert!(output.contains("Enter choice (1 or 2): "));
        assert_eq!(output.matches("Invalid choice. Please enter 1 or 2.").count(), 2);
    }

    #[test]
    fn choice_hint_lists_numbers() {
        assert_eq!(choice_hint(1), "1");
        assert_eq!(choice_hint(2), "1 or 2");
        assert_eq!(choice_hint(3), "1, 2 or 3");
    }

    #[test]
    fn headless_answers_empty() {
        let mut p = HeadlessPrompter;
        assert_eq!(p.read_line("title: ").unwrap(), "");
        assert!(!p.is_interactive());
        assert!(matches!(
            p.select("type", &["Blog"]),
            Err(ArticleError::HeadlessMissingArgument { .. })
        ));
    }
}
