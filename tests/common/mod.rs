//! # Sentential Test Harness
//!
//! Shared helpers for the integration tests: compact grammar construction, structural
//! invariants that every parse tree must satisfy, and discovery of JSON fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use sentential::{CommentBrackets, Grammar, Node, Parser, Rules, Sentential};

// ============================================================================
// GRAMMAR CONSTRUCTION
// ============================================================================

/// Builds rules from `(nonterminal, alternatives)` pairs.
pub fn rules(entries: &[(&str, &[&[&str]])]) -> Rules {
    Rules::new(entries.iter().map(|(name, alternatives)| {
        (
            name.to_string(),
            alternatives
                .iter()
                .map(|symbols| Sentential::new(symbols.iter().copied()))
                .collect(),
        )
    }))
    .unwrap()
}

/// `/* */` block comments and `//` line comments.
pub fn c_comments() -> Vec<CommentBrackets> {
    vec![
        CommentBrackets::block("/*", "*/").unwrap(),
        CommentBrackets::line("//").unwrap(),
    ]
}

pub fn parser(entries: &[(&str, &[&[&str]])]) -> Parser {
    Parser::new(Grammar::of(rules(entries), c_comments()).unwrap())
}

// ============================================================================
// TREE INVARIANTS
// ============================================================================

/// Asserts that every child lies within its parent and that siblings do not go backwards.
pub fn assert_spans_nested(node: &Node<'_>) {
    assert!(node.start() <= node.end(), "reversed span on {}", node.symbol());
    let mut previous_end = node.start();
    for child in node.children() {
        assert!(
            node.start() <= child.start() && child.end() <= node.end(),
            "{} [{}..{}] escapes {} [{}..{}]",
            child.symbol(),
            child.start(),
            child.end(),
            node.symbol(),
            node.start(),
            node.end()
        );
        assert!(
            previous_end <= child.start(),
            "{} starts before its previous sibling ends",
            child.symbol()
        );
        previous_end = child.end();
        assert_spans_nested(child);
    }
}

/// Concatenated content of the tree's leaves.
pub fn leaf_text(node: &Node<'_>) -> String {
    node.leaves().iter().map(|leaf| leaf.content()).collect()
}

// ============================================================================
// FIXTURES
// ============================================================================

/// A grammar and the inputs to run against it.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub grammar: serde_json::Value,
    #[serde(default)]
    pub symbol: Option<String>,
    pub cases: Vec<FixtureCase>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureCase {
    pub name: String,
    pub input: String,
    #[serde(default)]
    pub expect_error: Option<String>,
    /// Byte offset of the innermost failure.
    #[serde(default)]
    pub at: Option<usize>,
    /// Symbol of the innermost failure.
    #[serde(default)]
    pub failed_symbol: Option<String>,
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Discovers all fixture files recursively under `root`.
pub fn discover_fixtures<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path().extension().map_or(false, |ext| ext == "json")
                && e.path()
                    .file_name()
                    .map_or(false, |name| name.to_string_lossy().ends_with(".cases.json"))
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    paths.sort();
    paths
}

pub fn load_fixture(path: &Path) -> Fixture {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()))
}
