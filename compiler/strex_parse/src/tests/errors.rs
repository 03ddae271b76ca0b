//! Rejected patterns: kind, index, and span of the first problem.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;
use strex_ir::{CharTables, Span};

use crate::{
    parse, parse_with, CountProblem, EscapeProblem, Mode, ParseOptions, PatternError,
    PatternErrorKind,
};

fn err(pattern: &str) -> PatternError {
    parse(pattern).unwrap_err()
}

fn kind(pattern: &str) -> PatternErrorKind {
    err(pattern).kind
}

fn unterminated(mode: Mode) -> PatternErrorKind {
    PatternErrorKind::UnterminatedConstruct { mode }
}

fn count(problem: CountProblem) -> PatternErrorKind {
    PatternErrorKind::InvalidCount(problem)
}

fn escape(problem: EscapeProblem) -> PatternErrorKind {
    PatternErrorKind::InvalidEscape(problem)
}

// Unbounded quantifiers

#[test]
fn test_star_and_plus() {
    let e = err("a*");
    assert_eq!(e.kind, PatternErrorKind::UnboundedQuantifier('*'));
    assert_eq!(e.index, 1);
    assert_eq!(e.span, Span::new(1, 2));

    assert_eq!(kind("a+"), PatternErrorKind::UnboundedQuantifier('+'));
    assert_eq!(kind("*"), PatternErrorKind::UnboundedQuantifier('*'));
}

#[test]
fn test_star_after_very_deep_group() {
    let depth = 100_000;
    let pattern = format!("{}a{}*", "(".repeat(depth), ")".repeat(depth));
    let e = err(&pattern);
    assert_eq!(e.kind, PatternErrorKind::UnboundedQuantifier('*'));
    assert_eq!(e.index, 2 * depth + 1);
}

#[test]
fn test_index_counts_characters() {
    let e = err("é*");
    assert_eq!(e.index, 1);
    assert_eq!(e.span, Span::new(2, 3));
}

#[test]
fn test_first_error_wins() {
    let e = err("a*(");
    assert_eq!(e.kind, PatternErrorKind::UnboundedQuantifier('*'));
}

// Groups

#[test]
fn test_unterminated_group() {
    let e = err("(a");
    assert_eq!(e.kind, unterminated(Mode::Group));
    assert_eq!(e.index, 2);
    assert_eq!(e.span, Span::new(2, 2));

    assert_eq!(kind("(a|b"), unterminated(Mode::Group));
    assert_eq!(kind("((a)"), unterminated(Mode::Group));
}

#[test]
fn test_unmatched_close() {
    let e = err(")");
    assert_eq!(e.kind, PatternErrorKind::UnmatchedGroupClose);
    assert_eq!(e.index, 0);

    assert_eq!(err("(a))").index, 3);
    assert_eq!(err("a|b)").index, 3);
}

// Escapes

#[test]
fn test_trailing_backslash() {
    let e = err("ab\\");
    assert_eq!(e.kind, unterminated(Mode::Escape));
    assert_eq!(e.index, 3);
}

#[test]
fn test_truncated_hex() {
    assert_eq!(kind("\\x4"), unterminated(Mode::Escape));
    assert_eq!(kind("\\u00e"), unterminated(Mode::Escape));
    assert_eq!(kind("\\o10"), unterminated(Mode::Escape));
}

#[test]
fn test_bad_hex_digit() {
    let e = err("\\xZ1");
    assert_eq!(e.kind, escape(EscapeProblem::InvalidHexDigit('Z')));
    assert_eq!(e.index, 2);
}

#[test]
fn test_bad_octal_digit() {
    let e = err("\\o18");
    assert_eq!(e.kind, escape(EscapeProblem::InvalidOctalDigit('8')));
    assert_eq!(e.index, 3);
}

#[test]
fn test_octal_out_of_range() {
    let e = err("\\o400");
    assert_eq!(e.kind, escape(EscapeProblem::OctalOutOfRange(0o400)));
    assert_eq!(e.index, 0);
    assert_eq!(e.span, Span::new(0, 5));
}

#[test]
fn test_invalid_code_points() {
    assert_eq!(
        kind("\\UFFFFFFFF"),
        escape(EscapeProblem::InvalidCodePoint(0xFFFF_FFFF))
    );
    assert_eq!(
        kind("\\uD800"),
        escape(EscapeProblem::InvalidCodePoint(0xD800))
    );
}

// Sets

#[test]
fn test_unterminated_set() {
    let e = err("[abc");
    assert_eq!(e.kind, unterminated(Mode::Set));
    assert_eq!(e.index, 4);

    assert_eq!(kind("[^"), unterminated(Mode::Set));
    assert_eq!(kind("[a\\]"), unterminated(Mode::Set));
}

#[test]
fn test_escape_error_inside_set() {
    assert_eq!(kind("[\\x]"), escape(EscapeProblem::InvalidHexDigit(']')));
}

#[test]
fn test_negated_member_outside_universe() {
    let e = err("[^\\n]");
    assert_eq!(e.kind, PatternErrorKind::SetMemberNotFound('\n'));
    assert_eq!(e.index, 2);
    assert_eq!(e.span, Span::new(2, 4));
}

#[test]
fn test_negated_member_removed_twice() {
    let e = err("[^aa]");
    assert_eq!(e.kind, PatternErrorKind::SetMemberNotFound('a'));
    assert_eq!(e.index, 3);
}

#[test]
fn test_negated_member_with_custom_universe() {
    let options = ParseOptions::new().with_tables(CharTables::builtin().with_printable("abc".chars()));
    let e = parse_with("[^d]", options).unwrap_err();
    assert_eq!(e.kind, PatternErrorKind::SetMemberNotFound('d'));
}

// Counts

#[test]
fn test_unbounded_count() {
    let e = err("a{2,}");
    assert_eq!(e.kind, count(CountProblem::Unbounded));
    assert_eq!(e.index, 1);
    assert_eq!(e.span, Span::new(1, 5));
}

#[test]
fn test_unterminated_count() {
    let e = err("a{2");
    assert_eq!(e.kind, unterminated(Mode::Count));
    assert_eq!(e.index, 3);
}

#[test]
fn test_min_exceeds_max() {
    assert_eq!(
        kind("a{3,1}"),
        count(CountProblem::MinExceedsMax { min: 3, max: 1 })
    );
}

#[test]
fn test_too_many_arguments() {
    let e = err("a{1,2,3}");
    assert_eq!(e.kind, count(CountProblem::TooManyArguments));
    assert_eq!(e.index, 5);
}

#[test]
fn test_non_digit() {
    let e = err("a{x}");
    assert_eq!(e.kind, count(CountProblem::NonDigit('x')));
    assert_eq!(e.index, 2);

    assert_eq!(kind("a{ 2}"), count(CountProblem::NonDigit(' ')));
    assert_eq!(kind("a{-1}"), count(CountProblem::NonDigit('-')));
}

#[test]
fn test_missing_argument() {
    assert_eq!(kind("a{}"), count(CountProblem::MissingArgument));
    assert_eq!(kind("a{,}"), count(CountProblem::MissingArgument));
}

#[test]
fn test_number_too_large() {
    assert_eq!(
        kind("a{999999999999999999999999}"),
        count(CountProblem::TooLarge)
    );
}

#[test]
fn test_exceeds_limit() {
    let options = ParseOptions::new().with_max_repetition(10);
    let e = parse_with("a{2,11}", options).unwrap_err();
    assert_eq!(
        e.kind,
        count(CountProblem::ExceedsLimit { max: 11, limit: 10 })
    );
}

#[test]
fn test_dangling_count_is_still_validated() {
    assert_eq!(kind("{2,}a"), count(CountProblem::Unbounded));
}

// Rendering

#[test]
fn test_error_display() {
    assert_eq!(err("a*").to_string(), "unbounded quantifier `*` at index 1");
    assert_eq!(err("(a").to_string(), "unterminated group at index 2");
    assert_eq!(
        err("a{3,1}").to_string(),
        "invalid repetition count: minimum 3 is larger than maximum 1 at index 1"
    );
}
