//! Create command implementation
//!
//! The creation process:
//! 1. Pick the template type (flag or menu)
//! 2. Pick the output name (flag or prompt), sanitized
//! 3. Parse the template
//! 4. Collect required fields, then optional ones
//! 5. Render the frontmatter and write the article

use std::io::IsTerminal;
use std::path::PathBuf;

use console::Style;

use crate::cli::Cli;
use crate::collect::{Collector, HeadlessPrompter, LinePrompter, Prompter, TerminalPrompter};
use crate::commands::helpers::resolve_work_dir;
use crate::config::Config;
use crate::error::{ArticleError, Result};
use crate::frontmatter::format_frontmatter;
use crate::output::{sanitize_filename, write_article};
use crate::template::{TemplateKind, parse_template};

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateRequest {
    pub kind: Option<TemplateKind>,
    pub name: Option<String>,
}

impl CreateRequest {
    /// A blank name counts as not given.
    pub fn new(kind: Option<TemplateKind>, name: Option<String>) -> Self {
        Self {
            kind,
            name: name.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Run the create command
pub fn run(cli: Cli) -> Result<()> {
    let work_dir = resolve_work_dir(cli.dir)?;
    let config = Config::load(&work_dir, cli.author)?;
    let request = CreateRequest::new(cli.kind, cli.name);

    let path = if cli.headless {
        if request.kind.is_none() {
            return Err(ArticleError::HeadlessMissingArgument {
                flag: "--type".to_string(),
            });
        }
        if request.name.is_none() {
            return Err(ArticleError::HeadlessMissingArgument {
                flag: "--name".to_string(),
            });
        }
        create_article(&mut HeadlessPrompter, &config, request)?
    } else if std::io::stdin().is_terminal() {
        create_article(&mut TerminalPrompter, &config, request)?
    } else {
        let stdin = std::io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), std::io::stdout());
        create_article(&mut prompter, &config, request)?
    };

    println!(
        "\n{} {}",
        Style::new().green().bold().apply_to("Article created:"),
        path.display()
    );
    Ok(())
}

fn choose_kind<P: Prompter + ?Sized>(prompter: &mut P) -> Result<TemplateKind> {
    let labels: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.label()).collect();
    let index = prompter.select("Select template type:", &labels)?;
    TemplateKind::ALL
        .get(index)
        .copied()
        .ok_or_else(|| crate::error::invalid_type(index.to_string()))
}

fn ask_filename<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String> {
    let answer = prompter.read_line("Enter filename (without .md extension): ")?;
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Err(ArticleError::EmptyFilename);
    }
    Ok(trimmed.to_string())
}

/// Resolve the request, collect values and write the article.
///
/// Returns the path of the new file.
pub fn create_article<P: Prompter + ?Sized>(
    prompter: &mut P,
    config: &Config,
    request: CreateRequest,
) -> Result<PathBuf> {
    let kind = match request.kind {
        Some(kind) => kind,
        None => choose_kind(prompter)?,
    };
    let name = match request.name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name,
        None => ask_filename(prompter)?,
    };
    let name = sanitize_filename(&name);

    let template_path = config.template_dir.join(kind.file_name());
    tracing::debug!(template = %template_path.display(), %kind, "using template");
    let template = parse_template(&template_path)?;

    let data = Collector::new(prompter, &template.defaults, &config.default_author)
        .collect(&template)?;
    let frontmatter = format_frontmatter(&data);

    write_article(&config.articles_dir, &name, &frontmatter, &template.body)
}
