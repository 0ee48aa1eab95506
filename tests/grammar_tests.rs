//! Grammar construction and static analysis.

mod common;

use common::rules;
use sentential::grammar::analysis::{is_left_recursive_rule, is_self_producing_rule};
use sentential::{CommentBrackets, Grammar, Rules, Sentential, SententialError};

fn grammar(entries: &[(&str, &[&[&str]])]) -> Grammar {
    Grammar::of_rules(rules(entries)).unwrap()
}

#[cfg(test)]
mod analysis_tests {
    use super::*;

    #[test]
    fn direct_self_production() {
        assert!(grammar(&[("S", &[&["S"]])]).has_self_producing_rule());
    }

    #[test]
    fn self_production_through_another_nonterminal() {
        assert!(grammar(&[("S", &[&["T"]]), ("T", &[&["T"]])]).has_self_producing_rule());
    }

    #[test]
    fn productive_recursion_is_not_self_production() {
        let g = grammar(&[("S", &[&["S", "T"]]), ("T", &[&["b"]])]);
        assert!(!g.has_self_producing_rule());
        assert!(g.has_left_recursive_rule());
    }

    #[test]
    fn multi_symbol_self_production() {
        let g = grammar(&[("S", &[&["S", "S"], &["x"]])]);
        let found = g.self_producing_rules();
        assert_eq!(found.len(), 1);
        assert_eq!((found[0].nonterminal, found[0].alternative), ("S", 0));
    }

    #[test]
    fn left_recursion_predicate() {
        assert!(is_left_recursive_rule("S", &Sentential::new(["S", "a"])));
        assert!(!is_left_recursive_rule("S", &Sentential::new(["a", "S"])));
        assert!(is_self_producing_rule("S", &Sentential::new(["S"])));
    }

    #[test]
    fn left_recursive_rules_are_listed_per_alternative() {
        let g = grammar(&[
            ("E", &[&["E", "\\+", "T"], &["T"], &["E", "-", "T"]]),
            ("T", &[&["\\d+"]]),
        ]);
        let found: Vec<_> = g
            .left_recursive_rules()
            .iter()
            .map(|rule| (rule.nonterminal, rule.alternative))
            .collect();
        assert_eq!(found, [("E", 0), ("E", 2)]);
    }

    #[test]
    fn right_recursive_grammar_is_clean() {
        let g = grammar(&[("List", &[&["item", "List"], &[]])]);
        assert!(!g.has_self_producing_rule());
        assert!(!g.has_left_recursive_rule());
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn empty_nonterminal_is_rejected() {
        let result = Rules::new([(String::new(), vec![Sentential::empty()])]);
        assert!(matches!(result, Err(SententialError::EmptyNonterminal)));
    }

    #[test]
    fn accessors_reflect_construction() {
        let comments = vec![CommentBrackets::line("#").unwrap()];
        let g = Grammar::with_start_symbol(
            rules(&[("S", &[&["A", "b"]]), ("A", &[&["a"], &[]])]),
            "S",
            comments.clone(),
        )
        .unwrap();

        assert_eq!(g.start_symbol(), Some("S"));
        assert_eq!(g.comment_brackets(), comments.as_slice());
        assert_eq!(g.nonterminals().into_iter().collect::<Vec<_>>(), ["A", "S"]);
        assert_eq!(
            g.sententials("A").unwrap(),
            &[Sentential::new(["a"]), Sentential::empty()]
        );
        assert!(g.is_nonterminal("A"));
        assert!(!g.is_nonterminal("b"));
    }

    #[test]
    fn sententials_of_a_terminal_is_an_error() {
        let g = grammar(&[("S", &[&["a"]])]);
        let error = g.sententials("a").unwrap_err();
        assert!(matches!(error, SententialError::NoSuchNonterminal { ref symbol } if symbol == "a"));
    }

    #[test]
    fn start_symbol_must_be_a_nonterminal() {
        let result = Grammar::with_start_symbol(rules(&[("S", &[&["a"]])]), "a", []);
        assert!(matches!(result, Err(SententialError::UnknownStartSymbol { .. })));
    }

    #[test]
    fn grammars_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grammar>();
        assert_send_sync::<sentential::Parser>();
    }
}
