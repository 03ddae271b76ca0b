use super::*;
use crate::ErrorCode;
use strex_ir::Span;

fn sample_diagnostic() -> Diagnostic {
    Diagnostic::error(ErrorCode::E1004)
        .with_message("unbounded quantifier `*`")
        .with_label(Span::new(1, 2), "not allowed in a finite pattern")
        .with_note("every pattern must match finitely many strings")
        .with_suggestion("use a bounded count such as `{0,3}`")
}

fn render(mut emitter: TerminalEmitter<Vec<u8>>, diag: &Diagnostic) -> String {
    emitter.emit(diag);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap_or_default()
}

fn plain() -> TerminalEmitter<Vec<u8>> {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

// Fallback (no source) tests

#[test]
fn test_terminal_emitter_no_color() {
    let text = render(plain(), &sample_diagnostic());

    assert!(text.contains("error"));
    assert!(text.contains("[E1004]"));
    assert!(text.contains("unbounded quantifier"));
    assert!(text.contains("--> 1..2: not allowed"));
    assert!(text.contains("note:"));
    assert!(text.contains("help:"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn test_terminal_emitter_with_color() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    let text = render(emitter, &sample_diagnostic());

    assert!(text.contains("\x1b["));
    assert!(text.contains("E1004"));
}

#[test]
fn test_emit_all() {
    let mut emitter = plain();
    let diagnostics = vec![
        Diagnostic::error(ErrorCode::E1001).with_message("error 1"),
        Diagnostic::warning(ErrorCode::W1002).with_message("warning 1"),
    ];

    emitter.emit_all(&diagnostics);
    emitter.flush();

    let text = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert!(text.contains("error[E1001]: error 1"));
    assert!(text.contains("warning[W1002]: warning 1"));
}

#[test]
fn test_emit_summary_errors() {
    let mut emitter = plain();
    emitter.emit_summary(2, 1);
    let text = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert!(text.contains("2 previous errors"));
    assert!(text.contains("1 warning emitted"));
}

#[test]
fn test_emit_summary_single_error() {
    let mut emitter = plain();
    emitter.emit_summary(1, 0);
    let text = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert!(text.contains("previous error"));
    assert!(!text.contains("errors"));
}

#[test]
fn test_emit_summary_warnings_only() {
    let mut emitter = plain();
    emitter.emit_summary(0, 3);
    let text = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert!(text.contains("3 warnings"));
}

#[test]
fn test_emit_summary_nothing() {
    let mut emitter = plain();
    emitter.emit_summary(0, 0);
    assert!(emitter.into_inner().is_empty());
}

// ColorMode

#[test]
fn test_color_mode_resolution() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("auto".parse::<ColorMode>(), Ok(ColorMode::Auto));
    assert_eq!("always".parse::<ColorMode>(), Ok(ColorMode::Always));
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

// Snippet rendering

#[test]
fn test_snippet_single_line() {
    let emitter = plain().with_source("a*");
    let text = render(emitter, &sample_diagnostic());

    assert!(
        text.contains("--> pattern:1:2"),
        "Expected location header, got:\n{text}"
    );
    assert!(text.contains("1 | a*"), "Expected source line, got:\n{text}");
    assert!(
        text.contains("  |  ^ not allowed in a finite pattern"),
        "Expected caret under `*`, got:\n{text}"
    );
    assert!(
        !text.contains("1..2"),
        "Should not contain byte offsets, got:\n{text}"
    );
}

#[test]
fn test_snippet_point_span_at_end() {
    let diag = Diagnostic::error(ErrorCode::E1001)
        .with_message("unterminated group")
        .with_label(Span::new(3, 3), "pattern ends here");
    let text = render(plain().with_source("(ab"), &diag);

    assert!(text.contains("--> pattern:1:4"), "got:\n{text}");
    assert!(text.contains("  |    ^ pattern ends here"), "got:\n{text}");
}

#[test]
fn test_snippet_wide_span() {
    let diag = Diagnostic::error(ErrorCode::E1003)
        .with_message("unbounded count")
        .with_label(Span::new(1, 5), "no upper bound");
    let text = render(plain().with_source("a{2,}"), &diag);

    assert!(text.contains("^^^^ no upper bound"), "got:\n{text}");
}

#[test]
fn test_snippet_unicode_alignment() {
    // 'é' is two bytes but one column; `*` sits at byte 2.
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("unbounded quantifier `*`")
        .with_label(Span::new(2, 3), "here");
    let text = render(plain().with_source("é*"), &diag);

    assert!(text.contains("--> pattern:1:2"), "got:\n{text}");
    assert!(text.contains("  |  ^ here"), "got:\n{text}");
}

#[test]
fn test_snippet_multi_line_pattern() {
    let source = "ab\ncd*";
    let diag = Diagnostic::error(ErrorCode::E1004)
        .with_message("unbounded quantifier `*`")
        .with_label(Span::new(5, 6), "here");
    let text = render(plain().with_source(source).with_file_path("input.txt"), &diag);

    assert!(text.contains("--> input.txt:2:3"), "got:\n{text}");
    assert!(text.contains("2 | cd*"), "got:\n{text}");
    assert!(!text.contains("ab"), "got:\n{text}");
}

#[test]
fn test_snippet_notes_and_suggestions() {
    let text = render(plain().with_source("a*"), &sample_diagnostic());
    assert!(text.contains("= note: every pattern"), "got:\n{text}");
    assert!(text.contains("= help: use a bounded count"), "got:\n{text}");
}

#[test]
fn test_snippet_with_colors() {
    let emitter =
        TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, true).with_source("a*");
    let text = render(emitter, &sample_diagnostic());
    assert!(text.contains(colors::ERROR));
    assert!(text.contains(colors::GUTTER));
}

#[test]
fn test_fallback_without_labels() {
    let diag = Diagnostic::warning(ErrorCode::W1002).with_message("anchor has no effect");
    let text = render(plain().with_source("^a"), &diag);
    assert_eq!(text, "warning[W1002]: anchor has no effect\n\n");
}

#[test]
fn test_digit_count() {
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(10), 2);
    assert_eq!(digit_count(12345), 5);
}
