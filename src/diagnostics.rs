//! `miette` diagnostics for failed parses.
//!
//! A failed parse is still a tree. [`ParseDiagnostic::from_tree`] finds the point where
//! parsing stopped and turns it into a labelled, source-annotated report for the CLI or any
//! other consumer that wants to show the failure to a human.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::errors::NodeError;
use crate::node::Node;

/// A parse failure located in its source.
#[derive(Debug, Error, Diagnostic)]
#[error("Parse error: {error} (line {line})")]
#[diagnostic(code(sentential::parse))]
pub struct ParseDiagnostic {
    error: NodeError,
    symbol: String,
    line: usize,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
    #[help]
    help: Option<String>,
}

impl ParseDiagnostic {
    /// Builds a diagnostic for the innermost failure in `tree`, or `None` if the tree is
    /// error-free.
    pub fn from_tree(name: impl AsRef<str>, source: &str, tree: &Node<'_>) -> Option<Self> {
        let path = tree.failure_path();
        let failure = *path.last()?;
        let error = failure.error()?.clone();
        // The nonterminal whose alternatives ran out; the failure itself when it is the root.
        let enclosing = path.len().checked_sub(2).map_or(failure, |i| path[i]);
        let symbol = failure.symbol().to_string();

        let (label, help) = match &error {
            NodeError::NoMatch => (
                format!("expected `{symbol}`"),
                Some(format!(
                    "no alternative of `{}` matches here",
                    enclosing.symbol()
                )),
            ),
            NodeError::UnterminatedComment => (
                "comment opened here".to_string(),
                Some("close the block comment before the end of input".to_string()),
            ),
            NodeError::UnparsableAfter(top) => (
                "unexpected input".to_string(),
                Some(format!("`{top}` ends before this point")),
            ),
        };

        Some(Self {
            line: failure.start_line() + 1,
            span: (failure.start(), failure.end() - failure.start()).into(),
            src: NamedSource::new(name, source.to_string()),
            error,
            symbol,
            label,
            help,
        })
    }

    pub fn error(&self) -> &NodeError {
        &self.error
    }

    /// Symbol of the failing node; empty for trailing input.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// One-based line of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}
