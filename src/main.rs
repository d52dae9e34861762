//! create-article - markdown article scaffolding
//!
//! Reads a markdown template whose frontmatter describes the article's
//! fields, asks the user for each value and writes a new article with the
//! populated frontmatter and the template's body.

mod cli;
mod collect;
mod commands;
mod config;
mod error;
mod frontmatter;
mod output;
mod template;

use std::io::IsTerminal;

use cli::Cli;
use error::ArticleError;

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();
}

/// Exit quietly with success on SIGINT, SIGTERM or SIGHUP, like a cancelled prompt.
fn install_interrupt_handler() {
    let result = ctrlc::set_handler(|| {
        println!();
        std::process::exit(0);
    });
    if let Err(e) = result {
        tracing::warn!("Could not install interrupt handler: {e}");
    }
}

fn main() {
    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing(cli.verbose);
    for argument in &cli.ignored {
        tracing::debug!(argument = %argument, "ignoring unknown argument");
    }
    install_interrupt_handler();

    match commands::create::run(cli) {
        Ok(()) => {}
        Err(ArticleError::Interrupted) => {
            println!();
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
