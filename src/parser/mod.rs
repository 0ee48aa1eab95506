//! The backtracking engine.
//!
//! Parsing walks the grammar top-down. A terminal is matched by its anchored regular
//! expression; a nonterminal tries its alternatives in declared order and the first one that
//! matches without error wins. When every alternative fails, the one that progressed furthest
//! into the input (earliest declared on ties) becomes the reported failure, with its partial
//! children kept in the tree.
//!
//! Mismatches are data: they end up in [`Node::error`] and never unwind the stack.

mod skip;

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use crate::errors::NodeError;
use crate::grammar::{Grammar, Symbol, SymbolId};
use crate::node::Node;

use skip::skip_insignificant;

/// Parses input text against a shared, immutable [`Grammar`].
///
/// A parser keeps no state between calls; it can be cloned cheaply and used from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct Parser {
    grammar: Arc<Grammar>,
}

impl Parser {
    pub fn new(grammar: impl Into<Arc<Grammar>>) -> Self {
        Self {
            grammar: grammar.into(),
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Parses `source` as `symbol`.
    ///
    /// Always returns a node named `symbol`. Parse failures are reported through
    /// [`Node::error`] on the returned node or one of its descendants; see
    /// [`Node::failure`] to locate them.
    ///
    /// # Panics
    ///
    /// Panics if `symbol` is not a nonterminal of the grammar.
    #[instrument(level = "debug", skip_all, fields(symbol = symbol, bytes = source.len()))]
    pub fn parse<'s>(&self, source: &'s str, symbol: &str) -> Node<'s> {
        let id = match self.grammar.symbol_id(symbol) {
            Some(id) if self.grammar.is_nonterminal(symbol) => id,
            _ => panic!("cannot parse against unknown symbol '{symbol}'"),
        };

        let run = Run {
            grammar: &self.grammar,
            source,
        };
        let root = run.match_symbol(id, 0);
        if root.error().is_some() {
            debug!(progress = root.end(), "no derivation for input");
            return root;
        }
        run.finish(root, symbol)
    }
}

// ============================================================================
// MATCHING
// ============================================================================

/// State of a single `parse` call.
struct Run<'g, 's> {
    grammar: &'g Grammar,
    source: &'s str,
}

/// The outcome of matching one alternative.
struct Attempt<'s> {
    children: Vec<Node<'s>>,
    end: usize,
    error: Option<NodeError>,
}

impl<'g, 's> Run<'g, 's> {
    fn match_symbol(&self, id: SymbolId, pos: usize) -> Node<'s> {
        let definition = self.grammar.symbol(id);
        let name = definition.name.as_str();

        let pos = match skip_insignificant(self.source, pos, self.grammar.comment_brackets()) {
            Ok(pos) => pos,
            Err(unterminated) => {
                return Node::failed(
                    name,
                    self.source,
                    unterminated.opened_at,
                    NodeError::UnterminatedComment,
                )
            }
        };

        match &definition.kind {
            // A pattern can escape its `^(?:...)` wrapper with unbalanced groups, so a match
            // only counts when it starts at `pos`.
            Symbol::Terminal(pattern) => match pattern.find(&self.source[pos..]) {
                Some(found) if found.start() == 0 => {
                    Node::new(name, self.source, pos, pos + found.end(), vec![], None)
                }
                _ => Node::failed(name, self.source, pos, NodeError::NoMatch),
            },
            Symbol::Nonterminal(alternatives) => self.match_nonterminal(name, alternatives, pos),
        }
    }

    fn match_nonterminal(
        &self,
        name: &str,
        alternatives: &[Vec<SymbolId>],
        pos: usize,
    ) -> Node<'s> {
        let mut furthest: Option<Attempt<'s>> = None;

        for (index, alternative) in alternatives.iter().enumerate() {
            let attempt = self.match_sequence(alternative, pos);
            if attempt.error.is_none() {
                trace!(nonterminal = name, alternative = index, end = attempt.end, "matched");
                return Node::new(name, self.source, pos, attempt.end, attempt.children, None);
            }
            if furthest.as_ref().map_or(true, |best| attempt.end > best.end) {
                furthest = Some(attempt);
            }
        }

        match furthest {
            Some(attempt) => {
                trace!(nonterminal = name, progress = attempt.end, "no alternative matched");
                Node::new(name, self.source, pos, attempt.end, attempt.children, attempt.error)
            }
            None => Node::failed(name, self.source, pos, NodeError::NoMatch),
        }
    }

    /// Matches `symbols` left to right, stopping at the first child that carries an error.
    fn match_sequence(&self, symbols: &[SymbolId], pos: usize) -> Attempt<'s> {
        let mut children = Vec::with_capacity(symbols.len());
        let mut end = pos;

        for &symbol in symbols {
            let child = self.match_symbol(symbol, end);
            end = child.end();
            let error = child.error().cloned();
            children.push(child);
            if error.is_some() {
                return Attempt {
                    children,
                    end,
                    error,
                };
            }
        }

        Attempt {
            children,
            end,
            error: None,
        }
    }

    /// Skips trailing comments after a successful top-level match and reports any input that
    /// is left over as a synthetic child of the root.
    fn finish(&self, root: Node<'s>, symbol: &str) -> Node<'s> {
        let comments = self.grammar.comment_brackets();
        let (end, error) = match skip_insignificant(self.source, root.end(), comments) {
            Ok(end) if end == self.source.len() => return root.extended(end, None),
            Ok(end) => (end, NodeError::UnparsableAfter(symbol.to_string())),
            Err(unterminated) => (unterminated.opened_at, NodeError::UnterminatedComment),
        };

        debug!(offset = end, %error, "input left after top-level symbol");
        let trailing = Node::failed("", self.source, end, error);
        root.extended(end, Some(trailing))
    }
}
