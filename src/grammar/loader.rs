//! Loads grammars from JSON documents.
//!
//! The document shape is
//!
//! ```json
//! {
//!   "start": "List",
//!   "comments": [{ "start": "/*", "end": "*/" }, { "start": "//" }],
//!   "rules": {
//!     "List": [["\\{", "Sequence", "\\}"], ["\\{", "\\}"]],
//!     "Sequence": [["\\d+", ",", "Sequence"], ["\\d+"]]
//!   }
//! }
//! ```
//!
//! `start` and `comments` are optional. The order of each nonterminal's alternatives is
//! preserved and is the order the parser tries them in.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::errors::SententialError;
use crate::grammar::{CommentBrackets, Grammar, Rules, Sentential};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GrammarDocument {
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    comments: Vec<CommentBrackets>,
    rules: BTreeMap<String, Vec<Vec<String>>>,
}

/// Builds [`Grammar`] values from their JSON description.
pub struct GrammarLoader;

impl GrammarLoader {
    /// Parses a grammar document held in memory.
    pub fn load_str(json: &str) -> Result<Grammar, SententialError> {
        let document: GrammarDocument = serde_json::from_str(json)?;
        Self::build(document)
    }

    /// Reads and parses a grammar document from disk.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Grammar, SententialError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SententialError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = json.len(), "loading grammar");
        Self::load_str(&json)
    }

    fn build(document: GrammarDocument) -> Result<Grammar, SententialError> {
        let rules = Rules::new(document.rules.into_iter().map(|(name, alternatives)| {
            let sententials = alternatives.into_iter().map(Sentential::new).collect();
            (name, sententials)
        }))?;

        match document.start {
            Some(start) => Grammar::with_start_symbol(rules, start, document.comments),
            None => Grammar::of(rules, document.comments),
        }
    }
}
