//! The nonterminal -> alternatives mapping.

use std::collections::BTreeMap;

use crate::errors::SententialError;
use crate::grammar::Sentential;

/// Maps every nonterminal to its alternatives, in priority order.
///
/// The order of a nonterminal's alternatives is the order the parser tries them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rules {
    rules: BTreeMap<String, Vec<Sentential>>,
}

impl Rules {
    /// Builds the rule set, rejecting empty nonterminal names.
    pub fn new<I>(rules: I) -> Result<Self, SententialError>
    where
        I: IntoIterator<Item = (String, Vec<Sentential>)>,
    {
        let mut map = BTreeMap::new();
        for (name, alternatives) in rules {
            if name.is_empty() {
                return Err(SententialError::EmptyNonterminal);
            }
            map.entry(name)
                .or_insert_with(Vec::new)
                .extend(alternatives);
        }
        Ok(Self { rules: map })
    }

    pub fn contains(&self, nonterminal: &str) -> bool {
        self.rules.contains_key(nonterminal)
    }

    pub fn get(&self, nonterminal: &str) -> Option<&[Sentential]> {
        self.rules.get(nonterminal).map(Vec::as_slice)
    }

    pub fn nonterminals(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Sentential])> {
        self.rules
            .iter()
            .map(|(name, alternatives)| (name.as_str(), alternatives.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
