//! The `gen` command: stream every match of a pattern.

use std::io::Write;

use strex_diagnostic::emitter::DiagnosticEmitter;
use strex_parse::ParseOptions;
use tracing::debug;

use super::{compile, still_open, write_line};
use crate::CliError;

/// Write every string matched by `pattern`, one per line, stopping after
/// `limit` strings. Returns how many lines were written.
///
/// A reader that goes away (`strex gen ... | head`) ends generation
/// without an error.
pub fn generate(
    pattern: &str,
    options: ParseOptions,
    limit: Option<usize>,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<usize, CliError> {
    let output = compile(pattern, options, emitter)?;

    let mut written = 0;
    for line in strex_expand::generate(&output.ir).take(limit.unwrap_or(usize::MAX)) {
        if !write_line(out, &line)? {
            debug!(written, "output closed");
            return Ok(written);
        }
        written += 1;
    }
    still_open(out.flush())?;
    Ok(written)
}
