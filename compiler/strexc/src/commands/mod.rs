//! Command handlers for the strex CLI.
//!
//! Each handler takes the pattern, writes its result to `out`, and reports
//! parse diagnostics through the given emitter. Shared helpers live here in
//! the module root.

use std::io::{self, Write};

use strex_diagnostic::emitter::DiagnosticEmitter;
use strex_parse::{parse_with, ParseOptions, ParseOutput};
use tracing::debug;

use crate::CliError;

mod explain;
mod generate;
mod inspect;

pub use explain::explain;
pub use generate::generate;
pub use inspect::{check, count, dump_ir};

/// Parse `pattern`, rendering warnings, or the error and a summary.
fn compile(
    pattern: &str,
    options: ParseOptions,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<ParseOutput, CliError> {
    match parse_with(pattern, options) {
        Ok(output) => {
            if output.has_warnings() {
                emitter.emit_all(&output.diagnostics());
                emitter.flush();
            }
            Ok(output)
        }
        Err(error) => {
            debug!(%error, "pattern rejected");
            emitter.emit(&error.to_diagnostic());
            emitter.emit_summary(1, 0);
            emitter.flush();
            Err(CliError::InvalidPattern)
        }
    }
}

/// Map a closed reader to `Ok(false)`; other write errors pass through.
fn still_open(result: io::Result<()>) -> io::Result<bool> {
    match result {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(false),
        Err(e) => Err(e),
    }
}

fn write_line(out: &mut impl Write, line: impl std::fmt::Display) -> io::Result<bool> {
    still_open(writeln!(out, "{line}"))
}
