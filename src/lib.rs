//! Sentential: a grammar-driven backtracking parser.
//!
//! Grammars are data. A [`Grammar`] maps nonterminals to ordered alternatives, treats every
//! other symbol as an anchored regular expression, and knows which comments to skip between
//! tokens. A [`Parser`] interprets a grammar against input text and always returns a single
//! [`Node`] tree; failures are recorded on the tree as [`NodeError`]s rather than returned as
//! errors.

pub use crate::diagnostics::ParseDiagnostic;
pub use crate::errors::{NodeError, SententialError};
pub use crate::grammar::{CommentBrackets, Grammar, GrammarLoader, Rules, Sentential};
pub use crate::node::Node;
pub use crate::parser::Parser;

pub mod cli;
pub mod diagnostics;
pub mod errors;
pub mod grammar;
pub mod node;
pub mod parser;
