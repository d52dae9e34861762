//! CLI definitions using clap derive API

use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};

use crate::error::{self, ArticleError, Result};
use crate::template::TemplateKind;

impl FromStr for TemplateKind {
    type Err = ArticleError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "blog" => Ok(TemplateKind::Blog),
            "project" => Ok(TemplateKind::Project),
            _ => Err(error::invalid_type(value)),
        }
    }
}

/// create-article - scaffold markdown articles from templates
///
/// Reads BLOG.md or PROJECT.md from the working directory, asks for each
/// frontmatter field and writes the new article into `articles/`.
#[derive(Parser, Debug)]
#[command(
    name = "create-article",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Scaffold a markdown article from a frontmatter template",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  create-article\n    \
                  create-article --type blog --name my-first-post\n    \
                  create-article -T project -N portfolio-site --headless"
)]
pub struct Cli {
    /// Template type (blog or project, case-insensitive)
    #[arg(long = "type", short = 'T', value_name = "TYPE", allow_hyphen_values = true)]
    pub kind: Option<TemplateKind>,

    /// Output file name; `.md` is added when missing
    #[arg(long, short = 'N', allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Skip prompting and use template defaults
    #[arg(long, short = 'H')]
    pub headless: bool,

    /// Default value offered for the author field
    #[arg(long, env = "CREATE_ARTICLE_AUTHOR")]
    pub author: Option<String>,

    /// Directory holding the templates and the articles folder (defaults to current directory)
    #[arg(long, short = 'd', env = "CREATE_ARTICLE_DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Arguments dropped before parsing
    #[arg(skip)]
    pub ignored: Vec<String>,
}

/// Flags that take a value, in every spelling the parser accepts.
const VALUE_FLAGS: &[&str] = &["--type", "-T", "--name", "-N", "--author", "--dir", "-d"];

/// Flags that stand alone.
const SWITCH_FLAGS: &[&str] = &[
    "--headless",
    "-H",
    "--verbose",
    "-v",
    "--help",
    "-h",
    "--version",
    "-V",
];

/// Flags whose empty value means "not given", so the menu is shown instead.
const OPTIONAL_CHOICE_FLAGS: &[&str] = &["--type", "-T"];

fn is_inline_value_flag(arg: &str) -> bool {
    arg.split_once('=')
        .is_some_and(|(flag, _)| flag.starts_with("--") && VALUE_FLAGS.contains(&flag))
}

fn is_blank_choice(flag: &str, value: &OsString) -> bool {
    OPTIONAL_CHOICE_FLAGS.contains(&flag) && value.to_str().is_some_and(|v| v.trim().is_empty())
}

/// Arguments split into what the parser understands and what was dropped.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct KnownArgs {
    pub args: Vec<OsString>,
    pub ignored: Vec<String>,
}

/// Keep only the arguments the parser understands.
///
/// Unknown flags and stray words are dropped so they never fail the run. A
/// value flag at the very end is reported as a missing value, naming the flag
/// as it was typed. An empty `--type` counts as no `--type` at all.
pub fn filter_known_args<I, T>(args: I) -> Result<KnownArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut known = KnownArgs {
        args: args.next().into_iter().collect(),
        ignored: Vec::new(),
    };

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            known.ignored.push(arg.to_string_lossy().into_owned());
            continue;
        };

        if VALUE_FLAGS.contains(&text) {
            let value = args.next().ok_or_else(|| error::missing_value(text))?;
            if !is_blank_choice(text, &value) {
                known.args.push(arg);
                known.args.push(value);
            }
        } else if is_inline_value_flag(text) {
            let blank = text
                .split_once('=')
                .is_some_and(|(flag, value)| is_blank_choice(flag, &OsString::from(value)));
            if !blank {
                known.args.push(arg);
            }
        } else if SWITCH_FLAGS.contains(&text) {
            known.args.push(arg);
        } else {
            known.ignored.push(text.to_string());
        }
    }

    Ok(known)
}

impl Cli {
    /// Parse the process arguments, ignoring anything unknown.
    pub fn parse_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let known = filter_known_args(args)?;
        let mut cli = Cli::parse_from(known.args);
        cli.ignored = known.ignored;
        Ok(cli)
    }
}
