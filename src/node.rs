//! The parse tree.
//!
//! A [`Node`] is produced once by the parser and never mutated afterwards. Children are owned
//! by their parent and nodes hold no back-references, so a tree is a plain owned value that
//! borrows only the source text it was parsed from.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::errors::{NodeError, SententialError};

/// One parse-tree node: a symbol, a byte span of the source, children and an optional error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'s> {
    symbol: String,
    source: &'s str,
    start: usize,
    end: usize,
    children: Vec<Node<'s>>,
    error: Option<NodeError>,
}

impl<'s> Node<'s> {
    pub(crate) fn new(
        symbol: impl Into<String>,
        source: &'s str,
        start: usize,
        end: usize,
        children: Vec<Node<'s>>,
        error: Option<NodeError>,
    ) -> Self {
        debug_assert!(start <= end, "node span must not be reversed");
        Self {
            symbol: symbol.into(),
            source,
            start,
            end,
            children,
            error,
        }
    }

    /// A zero-width node at `at` carrying `error`.
    pub(crate) fn failed(
        symbol: impl Into<String>,
        source: &'s str,
        at: usize,
        error: NodeError,
    ) -> Self {
        Self::new(symbol, source, at, at, Vec::new(), Some(error))
    }

    /// Moves the end of a freshly built node and appends an optional trailing child.
    pub(crate) fn extended(mut self, end: usize, trailing: Option<Node<'s>>) -> Self {
        debug_assert!(self.start <= end);
        self.end = end;
        self.children.extend(trailing);
        self
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// The source text covered by this node.
    pub fn content(&self) -> &'s str {
        &self.source[self.start..self.end]
    }

    pub fn children(&self) -> &[Node<'s>] {
        &self.children
    }

    pub fn error(&self) -> Option<&NodeError> {
        self.error.as_ref()
    }

    /// The first direct child named `symbol`.
    pub fn find_child(&self, symbol: &str) -> Option<&Node<'s>> {
        self.children.iter().find(|child| child.symbol == symbol)
    }

    /// Like [`find_child`](Self::find_child), but a missing child is an error.
    pub fn child(&self, symbol: &str) -> Result<&Node<'s>, SententialError> {
        self.find_child(symbol)
            .ok_or_else(|| SententialError::MissingChild {
                parent: self.symbol.clone(),
                symbol: symbol.to_string(),
            })
    }

    /// Zero-based line of `start`.
    pub fn start_line(&self) -> usize {
        self.source[..self.start].matches('\n').count()
    }

    /// Whether this node or any descendant carries an error.
    pub fn has_error(&self) -> bool {
        self.error.is_some() || self.children.iter().any(Node::has_error)
    }

    /// The innermost node carrying an error, i.e. the point where parsing stopped.
    pub fn failure(&self) -> Option<&Node<'s>> {
        self.children
            .iter()
            .find_map(Node::failure)
            .or_else(|| self.error.as_ref().map(|_| self))
    }

    /// The nodes from `self` down to [`failure`](Self::failure), both included. Empty when
    /// the tree has no error.
    pub fn failure_path(&self) -> Vec<&Node<'s>> {
        let mut path = vec![self];
        let mut node = self;
        while let Some(child) = node.children.iter().find(|c| c.has_error()) {
            path.push(child);
            node = child;
        }
        if node.error.is_some() {
            path
        } else {
            Vec::new()
        }
    }

    /// Leaf nodes in source order.
    pub fn leaves(&self) -> Vec<&Node<'s>> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'n>(&'n self, leaves: &mut Vec<&'n Node<'s>>) {
        if self.children.is_empty() {
            leaves.push(self);
            return;
        }
        for child in &self.children {
            child.collect_leaves(leaves);
        }
    }
}

impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = if self.error.is_some() { 6 } else { 5 };
        let mut state = serializer.serialize_struct("Node", fields)?;
        state.serialize_field("symbol", &self.symbol)?;
        state.serialize_field("start", &self.start)?;
        state.serialize_field("end", &self.end)?;
        state.serialize_field("content", self.content())?;
        if let Some(error) = &self.error {
            state.serialize_field("error", error)?;
        } else {
            state.skip_field("error")?;
        }
        state.serialize_field("children", &self.children)?;
        state.end()
    }
}
