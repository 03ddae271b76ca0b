//! The `explain` command: display documentation for error codes.

use std::io::Write;

use strex_diagnostic::{ErrorCode, ErrorDocs};

use crate::CliError;

/// Write the documentation for `code` (e.g. `E1003`, case-insensitive).
pub fn explain(code: &str, out: &mut impl Write) -> Result<(), CliError> {
    let Ok(parsed) = code.parse::<ErrorCode>() else {
        return Err(CliError::UnknownCode(code.to_string()));
    };

    match ErrorDocs::get(parsed) {
        Some(doc) => writeln!(out, "{}", doc.trim_end())?,
        None => writeln!(out, "{parsed}: {}", parsed.description())?,
    }
    Ok(())
}
