//! The `count`, `ir` and `check` commands.

use std::io::Write;

use strex_diagnostic::emitter::DiagnosticEmitter;
use strex_ir::Node;
use strex_parse::ParseOptions;

use super::{compile, write_line};
use crate::CliError;

/// Print the number of strings `gen` would produce.
pub fn count(
    pattern: &str,
    options: ParseOptions,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<(), CliError> {
    let output = compile(pattern, options, emitter)?;
    write_line(out, describe_count(&output.ir))?;
    Ok(())
}

fn describe_count(ir: &Node) -> String {
    match ir.count() {
        Some(n) => n.to_string(),
        None => format!("more than {}", u128::MAX),
    }
}

/// Print the compiled IR in its regex-like form.
pub fn dump_ir(
    pattern: &str,
    options: ParseOptions,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<(), CliError> {
    let output = compile(pattern, options, emitter)?;
    write_line(out, &output.ir)?;
    Ok(())
}

/// Validate `pattern`. Warnings are rendered, but do not fail the check.
pub fn check(
    pattern: &str,
    options: ParseOptions,
    out: &mut impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> Result<(), CliError> {
    let output = compile(pattern, options, emitter)?;
    if output.has_warnings() {
        emitter.emit_summary(0, output.warnings.len());
        emitter.flush();
    }
    write_line(out, format_args!("ok: {}", describe_count(&output.ir)))?;
    Ok(())
}
