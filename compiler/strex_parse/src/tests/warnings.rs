//! Non-fatal findings collected alongside the IR.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use strex_ir::{Node, Span};

use super::ch;
use crate::{ParseWarning, Parser};

fn warnings(pattern: &str) -> Vec<ParseWarning> {
    Parser::new(pattern).parse().unwrap().warnings
}

#[test]
fn test_clean_pattern_has_no_warnings() {
    let output = Parser::new("a(b|c)").parse().unwrap();
    assert!(!output.has_warnings());
    assert!(output.diagnostics().is_empty());
}

#[test]
fn test_anchors_are_ignored() {
    let output = Parser::new("^a$").parse().unwrap();
    assert_eq!(output.ir, Node::Sequence(vec![ch('a')]));
    assert_eq!(
        output.warnings,
        vec![
            ParseWarning::IgnoredAnchor {
                span: Span::new(0, 1),
                anchor: '^',
            },
            ParseWarning::IgnoredAnchor {
                span: Span::new(2, 3),
                anchor: '$',
            },
        ]
    );
}

#[test]
fn test_anchor_inside_set_is_a_member() {
    assert!(warnings("[a$]").is_empty());
}

#[test]
fn test_dangling_optional() {
    let output = Parser::new("?a").parse().unwrap();
    assert_eq!(output.ir, Node::Sequence(vec![ch('a')]));
    assert_eq!(
        output.warnings,
        vec![ParseWarning::DanglingOptional {
            span: Span::new(0, 1)
        }]
    );
}

#[test]
fn test_dangling_optional_in_group_and_branch() {
    assert_eq!(warnings("(?a)").len(), 1);
    assert_eq!(warnings("a|?b").len(), 1);
}

#[test]
fn test_dangling_count() {
    let output = Parser::new("{2,3}a").parse().unwrap();
    assert_eq!(output.ir, Node::Sequence(vec![ch('a')]));
    assert_eq!(
        output.warnings,
        vec![ParseWarning::DanglingCount {
            span: Span::new(0, 5)
        }]
    );
}

#[test]
fn test_warnings_in_pattern_order() {
    let codes: Vec<_> = warnings("^?{2}")
        .iter()
        .map(|w| w.code().as_str())
        .collect();
    assert_eq!(codes, vec!["W1002", "W1001", "W1003"]);
}

#[test]
fn test_diagnostics_match_warnings() {
    let output = Parser::new("$").parse().unwrap();
    let diagnostics = output.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].labels[0].span, Span::new(0, 1));
}
