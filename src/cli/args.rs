//! Defines the command-line arguments and subcommands for the Sentential CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "sentential",
    version,
    about = "Parse text against a declarative grammar and report where it fails."
)]
pub struct SententialArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a file and print its parse tree.
    Parse {
        /// The JSON grammar to parse against.
        #[arg(short, long)]
        grammar: PathBuf,
        /// The nonterminal to parse as. Defaults to the grammar's start symbol.
        #[arg(short, long)]
        symbol: Option<String>,
        /// How to print the tree.
        #[arg(short, long, value_enum, default_value_t = Format::Tree)]
        format: Format,
        /// The file to parse.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Report self-producing and left-recursive rules in a grammar.
    Check {
        /// The JSON grammar to analyse.
        #[arg(short, long)]
        grammar: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented, colored tree.
    Tree,
    /// The tree as JSON.
    Json,
}
