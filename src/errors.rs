//! Sentential Error Handling
//!
//! Two error domains live here and they never mix:
//!
//! - [`SententialError`] covers everything that can go wrong *around* a parse: building
//!   rules and grammars, loading grammar documents, and looking up children that are not
//!   there. These are returned through `Result`.
//! - [`NodeError`] is the parse failure taxonomy. It is plain data stored on a
//!   [`Node`](crate::Node); an input that does not match the grammar is an ordinary
//!   outcome, not an `Err`.

use std::path::PathBuf;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// CONSTRUCTION / LOADING ERRORS
// ============================================================================

/// Unified error type for grammar construction, grammar loading and tree lookups.
#[derive(Debug, Error, Diagnostic)]
pub enum SententialError {
    #[error("Grammar error: nonterminal names must not be empty")]
    #[diagnostic(
        code(sentential::grammar::empty_nonterminal),
        help("every key of the rule map names a nonterminal and needs at least one character")
    )]
    EmptyNonterminal,

    #[error("Grammar error: start symbol '{symbol}' has no rules")]
    #[diagnostic(code(sentential::grammar::unknown_start_symbol))]
    UnknownStartSymbol { symbol: String },

    #[error("Grammar error: '{symbol}' is not a nonterminal")]
    #[diagnostic(code(sentential::grammar::no_such_nonterminal))]
    NoSuchNonterminal { symbol: String },

    #[error("Grammar error: terminal '{symbol}' is not a valid regular expression")]
    #[diagnostic(code(sentential::grammar::invalid_pattern))]
    InvalidPattern {
        symbol: String,
        #[source]
        source: regex::Error,
    },

    #[error("Grammar error: comment delimiters must not be empty")]
    #[diagnostic(code(sentential::grammar::empty_comment_delimiter))]
    EmptyCommentDelimiter,

    #[error("Tree error: node '{parent}' has no child '{symbol}'")]
    #[diagnostic(code(sentential::tree::missing_child))]
    MissingChild { parent: String, symbol: String },

    #[error("Load error: failed to read '{}'", path.display())]
    #[diagnostic(code(sentential::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Load error: malformed grammar document")]
    #[diagnostic(
        code(sentential::load::format),
        help("expected {{\"start\": ..., \"comments\": [...], \"rules\": {{\"S\": [[...], ...]}}}}")
    )]
    Format(#[from] serde_json::Error),
}

// ============================================================================
// PARSE FAILURE TAXONOMY
// ============================================================================

/// Why a node failed to match. Propagates unchanged from a child to every enclosing
/// sequence and nonterminal attempt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(into = "String")]
pub enum NodeError {
    /// A terminal pattern did not match, or no alternative of a nonterminal matched.
    #[error("No match")]
    NoMatch,
    /// A block comment opener was found without its closing delimiter.
    #[error("Unterminated comment")]
    UnterminatedComment,
    /// The named top-level symbol matched, but input remained after it.
    #[error("Unparsable code after symbol [{0}]")]
    UnparsableAfter(String),
}

impl From<NodeError> for String {
    fn from(error: NodeError) -> Self {
        error.to_string()
    }
}
