//! Handles all user-facing output for the CLI.
//!
//! Every writer is generic over `WriteColor` so the same code drives the terminal and
//! in-memory buffers.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, WriteColor};

use crate::grammar::analysis::RuleRef;
use crate::{Grammar, Node};

// ============================================================================
// PARSE TREES
// ============================================================================

/// Writes `node` and its subtree, one node per line, indented by depth.
pub fn write_tree<W: WriteColor>(out: &mut W, node: &Node<'_>) -> io::Result<()> {
    write_node(out, node, 0)
}

fn write_node<W: WriteColor>(out: &mut W, node: &Node<'_>, depth: usize) -> io::Result<()> {
    write!(out, "{:indent$}", "", indent = depth * 2)?;

    let symbol = if node.symbol().is_empty() {
        "<input>"
    } else {
        node.symbol()
    };
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(node.children().is_empty()))?;
    write!(out, "{symbol}")?;
    out.reset()?;
    write!(out, " [{}..{}]", node.start(), node.end())?;

    if node.children().is_empty() && node.error().is_none() {
        write!(out, " {:?}", node.content())?;
    }
    if let Some(error) = node.error() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
        write!(out, " {error}")?;
        out.reset()?;
    }
    writeln!(out)?;

    for child in node.children() {
        write_node(out, child, depth + 1)?;
    }
    Ok(())
}

/// Writes the tree as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, node: &Node<'_>) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, node)?;
    writeln!(out)
}

// ============================================================================
// GRAMMAR CHECKS
// ============================================================================

/// Writes the static analysis report. Returns `true` if the grammar is safe to parse with.
pub fn write_check<W: WriteColor>(out: &mut W, grammar: &Grammar) -> io::Result<bool> {
    let self_producing = grammar.self_producing_rules();
    let left_recursive = grammar.left_recursive_rules();

    writeln!(
        out,
        "{} nonterminals, start symbol: {}",
        grammar.nonterminals().len(),
        grammar.start_symbol().unwrap_or("(none)")
    )?;
    write_findings(out, "self-producing", &self_producing)?;
    write_findings(out, "left-recursive", &left_recursive)?;

    let ok = self_producing.is_empty() && left_recursive.is_empty();
    if ok {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
        writeln!(out, "Grammar check passed")?;
        out.reset()?;
    }
    Ok(ok)
}

fn write_findings<W: WriteColor>(out: &mut W, kind: &str, rules: &[RuleRef<'_>]) -> io::Result<()> {
    for rule in rules {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
        write!(out, "{kind}")?;
        out.reset()?;
        writeln!(
            out,
            ": {} -> {} (alternative {})",
            rule.nonterminal, rule.sentential, rule.alternative
        )?;
    }
    Ok(())
}
