//! Grammar definitions.
//!
//! A [`Grammar`] wraps the user-facing [`Rules`] together with a compiled symbol table. Every
//! symbol name that appears in the rules is resolved exactly once, at construction time:
//! keys of the rule map become nonterminals whose alternatives refer to other symbols by
//! index, and every other name becomes a terminal whose regular expression is compiled and
//! cached. The parser only ever works against the compiled table, so mutually recursive
//! nonterminals are plain indices into one arena rather than nested owned structures.

pub mod analysis;
pub mod comments;
pub mod loader;
pub mod rules;
pub mod sentential;

use std::collections::{BTreeSet, HashMap};

use regex::Regex;
use tracing::debug;

use crate::errors::SententialError;

pub use comments::CommentBrackets;
pub use loader::GrammarLoader;
pub use rules::Rules;
pub use sentential::Sentential;

// ============================================================================
// COMPILED SYMBOL TABLE
// ============================================================================

/// Index of a symbol in a grammar's symbol table.
pub(crate) type SymbolId = usize;

/// A symbol resolved against the rules.
#[derive(Debug, Clone)]
pub(crate) enum Symbol {
    /// Matched directly against the input. The pattern is anchored at the match offset.
    Terminal(Regex),
    /// Expanded through its alternatives, in priority order.
    Nonterminal(Vec<Vec<SymbolId>>),
}

#[derive(Debug, Clone)]
pub(crate) struct SymbolDef {
    pub name: String,
    pub kind: Symbol,
}

// ============================================================================
// GRAMMAR
// ============================================================================

/// An immutable grammar: rules, an optional start symbol and the recognized comments.
///
/// Grammars hold no interior mutability and can be shared across threads and parsers.
#[derive(Debug, Clone)]
pub struct Grammar {
    rules: Rules,
    start_symbol: Option<String>,
    comments: Vec<CommentBrackets>,
    symbols: Vec<SymbolDef>,
    index: HashMap<String, SymbolId>,
}

impl Grammar {
    /// Builds a grammar without a start symbol.
    pub fn of<I>(rules: Rules, comments: I) -> Result<Self, SententialError>
    where
        I: IntoIterator<Item = CommentBrackets>,
    {
        Self::build(rules, None, comments.into_iter().collect())
    }

    /// Builds a grammar with neither a start symbol nor comments.
    pub fn of_rules(rules: Rules) -> Result<Self, SententialError> {
        Self::build(rules, None, Vec::new())
    }

    /// Builds a grammar whose start symbol must be one of its nonterminals.
    pub fn with_start_symbol<I>(
        rules: Rules,
        start_symbol: impl Into<String>,
        comments: I,
    ) -> Result<Self, SententialError>
    where
        I: IntoIterator<Item = CommentBrackets>,
    {
        let start_symbol = start_symbol.into();
        if !rules.contains(&start_symbol) {
            return Err(SententialError::UnknownStartSymbol {
                symbol: start_symbol,
            });
        }
        Self::build(rules, Some(start_symbol), comments.into_iter().collect())
    }

    fn build(
        rules: Rules,
        start_symbol: Option<String>,
        comments: Vec<CommentBrackets>,
    ) -> Result<Self, SententialError> {
        let mut symbols = Vec::new();
        let mut index = HashMap::new();

        for name in rules.nonterminals() {
            index.insert(name.to_string(), symbols.len());
            symbols.push(SymbolDef {
                name: name.to_string(),
                kind: Symbol::Nonterminal(Vec::new()),
            });
        }

        for (name, sententials) in rules.iter() {
            let mut alternatives = Vec::with_capacity(sententials.len());
            for sentential in sententials {
                let ids = sentential
                    .iter()
                    .map(|symbol| intern(symbol, &mut symbols, &mut index))
                    .collect::<Result<Vec<_>, _>>()?;
                alternatives.push(ids);
            }
            symbols[index[name]].kind = Symbol::Nonterminal(alternatives);
        }

        debug!(
            nonterminals = rules.len(),
            terminals = symbols.len() - rules.len(),
            comments = comments.len(),
            "compiled grammar"
        );

        Ok(Self {
            rules,
            start_symbol,
            comments,
            symbols,
            index,
        })
    }

    pub fn nonterminals(&self) -> BTreeSet<&str> {
        self.rules.nonterminals().collect()
    }

    pub fn is_nonterminal(&self, name: &str) -> bool {
        self.rules.contains(name)
    }

    /// The alternatives of `nonterminal`, in priority order.
    pub fn sententials(&self, nonterminal: &str) -> Result<&[Sentential], SententialError> {
        self.rules
            .get(nonterminal)
            .ok_or_else(|| SententialError::NoSuchNonterminal {
                symbol: nonterminal.to_string(),
            })
    }

    pub fn start_symbol(&self) -> Option<&str> {
        self.start_symbol.as_deref()
    }

    pub fn comment_brackets(&self) -> &[CommentBrackets] {
        &self.comments
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub(crate) fn symbol_id(&self, name: &str) -> Option<SymbolId> {
        self.index.get(name).copied()
    }

    pub(crate) fn symbol(&self, id: SymbolId) -> &SymbolDef {
        &self.symbols[id]
    }
}

/// Returns the id of `name`, compiling it as a terminal on first sight.
fn intern(
    name: &str,
    symbols: &mut Vec<SymbolDef>,
    index: &mut HashMap<String, SymbolId>,
) -> Result<SymbolId, SententialError> {
    if let Some(&id) = index.get(name) {
        return Ok(id);
    }
    let pattern =
        Regex::new(&format!("^(?:{name})")).map_err(|source| SententialError::InvalidPattern {
            symbol: name.to_string(),
            source,
        })?;
    let id = symbols.len();
    symbols.push(SymbolDef {
        name: name.to_string(),
        kind: Symbol::Terminal(pattern),
    });
    index.insert(name.to_string(), id);
    Ok(id)
}
