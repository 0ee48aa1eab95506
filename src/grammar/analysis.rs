//! Static checks for grammars the backtracking parser cannot terminate on.
//!
//! None of these are run by the parser. They exist so grammar authors can reject a grammar
//! before handing it to [`Parser`](crate::Parser).

use std::collections::HashSet;

use crate::grammar::{Grammar, Sentential};

/// A single offending alternative: the nonterminal and the index of the alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRef<'g> {
    pub nonterminal: &'g str,
    pub alternative: usize,
    pub sentential: &'g Sentential,
}

/// True iff `sentential` is non-empty and consists only of `nonterminal`.
pub fn is_self_producing_rule(nonterminal: &str, sentential: &Sentential) -> bool {
    !sentential.is_empty() && sentential.iter().all(|symbol| symbol == nonterminal)
}

/// True iff the first symbol of `sentential` is `nonterminal` itself.
pub fn is_left_recursive_rule(nonterminal: &str, sentential: &Sentential) -> bool {
    sentential.first() == Some(nonterminal)
}

impl Grammar {
    /// Whether some nonterminal can derive itself without consuming input.
    pub fn has_self_producing_rule(&self) -> bool {
        !self.self_producing_rules().is_empty()
    }

    /// Every alternative that produces its own nonterminal, either directly or through a
    /// chain of nonterminals whose only alternative is another single nonterminal.
    pub fn self_producing_rules(&self) -> Vec<RuleRef<'_>> {
        self.alternatives()
            .filter(|rule| {
                is_self_producing_rule(rule.nonterminal, rule.sentential)
                    || self.passes_through_to(rule.nonterminal, rule.sentential)
            })
            .collect()
    }

    pub fn has_left_recursive_rule(&self) -> bool {
        !self.left_recursive_rules().is_empty()
    }

    pub fn left_recursive_rules(&self) -> Vec<RuleRef<'_>> {
        self.alternatives()
            .filter(|rule| is_left_recursive_rule(rule.nonterminal, rule.sentential))
            .collect()
    }

    fn alternatives(&self) -> impl Iterator<Item = RuleRef<'_>> {
        self.rules().iter().flat_map(|(nonterminal, sententials)| {
            sententials
                .iter()
                .enumerate()
                .map(move |(alternative, sentential)| RuleRef {
                    nonterminal,
                    alternative,
                    sentential,
                })
        })
    }

    /// Follows single-nonterminal pass-through alternatives starting at `sentential` and
    /// reports whether the chain comes back to `origin`.
    fn passes_through_to(&self, origin: &str, sentential: &Sentential) -> bool {
        let mut visited = HashSet::new();
        let mut next = self.pass_through(sentential);

        while let Some(current) = next {
            if current == origin {
                return true;
            }
            if !visited.insert(current) {
                return false;
            }
            next = match self.rules().get(current) {
                Some([only]) => self.pass_through(only),
                _ => None,
            };
        }
        false
    }

    fn pass_through<'s>(&self, sentential: &'s Sentential) -> Option<&'s str> {
        match sentential.symbols() {
            [single] if self.is_nonterminal(single) => Some(single.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Rules;

    fn grammar(entries: &[(&str, &[&[&str]])]) -> Grammar {
        let rules = Rules::new(entries.iter().map(|(name, alternatives)| {
            (
                name.to_string(),
                alternatives.iter().map(|a| Sentential::new(a.iter().copied())).collect(),
            )
        }))
        .unwrap();
        Grammar::of_rules(rules).unwrap()
    }

    #[test]
    fn self_producing_rule_predicate() {
        assert!(is_self_producing_rule("S", &Sentential::new(["S"])));
        assert!(is_self_producing_rule("S", &Sentential::new(["S", "S"])));
        assert!(!is_self_producing_rule("S", &Sentential::new(["S", "T"])));
        assert!(!is_self_producing_rule("S", &Sentential::empty()));
    }

    #[test]
    fn left_recursive_rule_predicate() {
        assert!(is_left_recursive_rule("S", &Sentential::new(["S", "a"])));
        assert!(!is_left_recursive_rule("S", &Sentential::new(["a", "S"])));
        assert!(!is_left_recursive_rule("S", &Sentential::empty()));
    }

    #[test]
    fn pass_through_chain_back_to_origin() {
        let g = grammar(&[("S", &[&["T"], &["x"]]), ("T", &[&["U"]]), ("U", &[&["S"]])]);
        let found = g.self_producing_rules();
        assert!(found
            .iter()
            .any(|rule| rule.nonterminal == "S" && rule.alternative == 0));
    }

    #[test]
    fn chain_through_a_choice_is_not_followed() {
        let g = grammar(&[("S", &[&["T"]]), ("T", &[&["S"], &["x"]])]);
        let found = g.self_producing_rules();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].nonterminal, "T");
    }

    #[test]
    fn terminal_chains_stop() {
        let g = grammar(&[("S", &[&["T"]]), ("T", &[&["b"]])]);
        assert!(!g.has_self_producing_rule());
    }
}
