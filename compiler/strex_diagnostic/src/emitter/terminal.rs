//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! With a source attached, labels are rendered as snippets of the pattern
//! with carets under the offending characters:
//!
//! ```text
//! error[E1004]: unbounded quantifier `*`
//!   --> pattern:1:2
//!    |
//!  1 | a*
//!    |  ^ not allowed in a finite pattern
//!    |
//!    = help: use a bounded count such as `{0,3}`
//! ```
//!
//! Without a source, labels fall back to raw byte ranges.

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Number of decimal digits in `n`.
fn digit_count(mut n: u32) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Use colors when the output is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "unknown color mode `{other}` (expected auto, always, or never)"
            )),
        }
    }
}

/// The pattern a diagnostic points into.
struct SourceContext {
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext>,
    file_path: String,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is used for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
            file_path: "pattern".to_string(),
        }
    }

    /// Attach the pattern text so labels render as snippets.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let text = source.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SourceContext { text, lines });
        self
    }

    /// Name shown in the `-->` location header. Defaults to `pattern`.
    #[must_use]
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&severity.to_string(), color);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_gutter(&mut self, width: usize, line: Option<u32>) {
        let number = line.map(|n| n.to_string()).unwrap_or_default();
        let text = format!("{number:>width$} |");
        self.write_colored(&text, colors::GUTTER);
    }

    /// Render labels as pattern snippets.
    fn emit_snippets(&mut self, labels: &[Label]) {
        let Some(source) = self.source.take() else {
            return;
        };

        let positions: Vec<_> = labels
            .iter()
            .map(|label| {
                let (line, col) = source.lines.offset_to_line_col(&source.text, label.span.start);
                let (end_line, end_col) =
                    source.lines.offset_to_line_col(&source.text, label.span.end);
                (line, col, end_line, end_col)
            })
            .collect();

        let max_line = positions.iter().map(|p| p.0).max().unwrap_or(1);
        let width = digit_count(max_line);

        if let Some(&(line, col, _, _)) = positions.first() {
            let _ = writeln!(
                self.writer,
                "{:width$}--> {}:{line}:{col}",
                "", self.file_path
            );
        }

        self.write_gutter(width, None);
        let _ = writeln!(self.writer);

        for (label, &(line, col, end_line, end_col)) in labels.iter().zip(&positions) {
            let text = source.lines.line_text(&source.text, line).unwrap_or_default();
            let line_chars = text.chars().count();

            self.write_gutter(width, Some(line));
            let _ = writeln!(self.writer, " {text}");

            // Carets run to the span end, or the end of the line for
            // multi-line spans. Point spans still get one caret.
            let start = col as usize - 1;
            let end = if end_line == line {
                end_col as usize - 1
            } else {
                line_chars.max(start + 1)
            };
            let marks = end.saturating_sub(start).max(1);

            self.write_gutter(width, None);
            let _ = write!(self.writer, " {:start$}", "");
            let underline = format!("{} {}", "^".repeat(marks), label.message);
            self.write_colored(underline.trim_end(), colors::ERROR);
            let _ = writeln!(self.writer);
        }

        self.write_gutter(width, None);
        let _ = writeln!(self.writer);

        self.source = Some(source);
    }

    /// Render labels as raw byte ranges.
    fn emit_fallback_labels(&mut self, labels: &[Label]) {
        for label in labels {
            let _ = write!(self.writer, "  --> {:?}: ", label.span);
            self.write_colored(&label.message, colors::ERROR);
            let _ = writeln!(self.writer);
        }
    }

    fn emit_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        if self.source.is_some() && !diagnostic.labels.is_empty() {
            self.emit_snippets(&diagnostic.labels);
        } else {
            self.emit_fallback_labels(&diagnostic.labels);
        }

        for note in &diagnostic.notes {
            self.emit_trailer("note", colors::BOLD, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.emit_trailer("help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let error_part = if error_count == 1 {
                "previous error".to_string()
            } else {
                format!("{error_count} previous errors")
            };
            if warning_count > 0 {
                let _ = writeln!(
                    self.writer,
                    ": aborting due to {error_part}; {warning_count} warning{} emitted",
                    plural_s(warning_count)
                );
            } else {
                let _ = writeln!(self.writer, ": aborting due to {error_part}");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}

#[cfg(test)]
mod tests;
