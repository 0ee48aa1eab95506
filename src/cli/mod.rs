//! The Sentential Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::IsTerminal;
use std::path::Path;
use std::{fs, process};

use clap::Parser as _;
use miette::{miette, Report};
use termcolor::{ColorChoice, StandardStream};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::args::{Command, Format, SententialArgs};
use crate::{Grammar, GrammarLoader, ParseDiagnostic, Parser, SententialError};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    init_tracing();
    let args = SententialArgs::parse();

    let result = match args.command {
        Command::Parse {
            grammar,
            symbol,
            format,
            file,
        } => handle_parse(&grammar, symbol.as_deref(), format, &file),
        Command::Check { grammar } => handle_check(&grammar),
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(report) => {
            eprintln!("{report:?}");
            process::exit(1);
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentential=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handles the `parse` subcommand. Returns `false` if the input did not parse.
fn handle_parse(
    grammar_path: &Path,
    symbol: Option<&str>,
    format: Format,
    file: &Path,
) -> miette::Result<bool> {
    let grammar = GrammarLoader::load_file(grammar_path)?;
    let symbol = resolve_symbol(&grammar, symbol)?;
    let source = fs::read_to_string(file).map_err(|source| SententialError::Io {
        path: file.to_path_buf(),
        source,
    })?;

    let parser = Parser::new(grammar);
    let tree = parser.parse(&source, &symbol);
    debug!(symbol = %symbol, end = tree.end(), "parsed {}", file.display());

    let mut stdout = color_stdout();
    let written = match format {
        Format::Tree => output::write_tree(&mut stdout, &tree),
        Format::Json => output::write_json(&mut stdout, &tree),
    };
    written.map_err(|e| miette!("failed to write output: {e}"))?;

    match ParseDiagnostic::from_tree(file.display().to_string(), &source, &tree) {
        Some(diagnostic) => {
            eprintln!("{:?}", Report::new(diagnostic));
            Ok(false)
        }
        None => Ok(true),
    }
}

/// Handles the `check` subcommand. Returns `false` if the grammar has problematic rules.
fn handle_check(grammar_path: &Path) -> miette::Result<bool> {
    let grammar = GrammarLoader::load_file(grammar_path)?;
    let mut stdout = color_stdout();
    let ok = output::write_check(&mut stdout, &grammar)
        .map_err(|e| miette!("failed to write output: {e}"))?;
    if !ok {
        warn!(grammar = %grammar_path.display(), "grammar cannot be parsed safely");
    }
    Ok(ok)
}

/// Colors only when stdout is a terminal.
fn color_stdout() -> StandardStream {
    let choice = if std::io::stdout().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

fn resolve_symbol(grammar: &Grammar, symbol: Option<&str>) -> miette::Result<String> {
    let Some(symbol) = symbol.or(grammar.start_symbol()) else {
        return Err(miette!(
            help = "pass --symbol or add \"start\" to the grammar",
            "grammar has no start symbol"
        ));
    };
    if !grammar.is_nonterminal(symbol) {
        return Err(SententialError::NoSuchNonterminal {
            symbol: symbol.to_string(),
        }
        .into());
    }
    Ok(symbol.to_string())
}
