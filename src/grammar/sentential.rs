//! Right-hand sides of grammar alternatives.

use std::fmt;

/// An ordered, possibly empty sequence of symbol names.
///
/// One `Sentential` is one alternative expansion of a nonterminal. The empty sequence is an
/// erasing alternative and matches the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sentential {
    symbols: Vec<String>,
}

impl Sentential {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// The erasing alternative.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn first(&self) -> Option<&str> {
        self.symbols.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Sentential {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Sentential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbols.is_empty() {
            return write!(f, "ε");
        }
        write!(f, "{}", self.symbols.join(" "))
    }
}
