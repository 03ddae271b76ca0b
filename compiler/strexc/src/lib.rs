//! strex command-line driver.
//!
//! `strex` parses a bounded pattern and streams every string it matches.
//! The binary in `main.rs` is a thin shell over [`CliArgs::parse`] and
//! [`run`]; everything here writes to caller-supplied sinks so it can be
//! driven from tests.

mod cli;
pub mod commands;
mod error;
mod tracing_setup;

pub use cli::{usage, CliArgs, Command};
pub use error::CliError;
pub use tracing_setup::init_tracing;

use std::io::{self, IsTerminal, Write};

use strex_diagnostic::emitter::{ColorMode, TerminalEmitter};

/// Execute a parsed command line, writing results to `out` and diagnostics
/// to stderr.
pub fn run(args: &CliArgs, out: &mut impl Write) -> Result<(), CliError> {
    let options = args.parse_options();

    match &args.command {
        Command::Gen { pattern } => {
            let mut emitter = stderr_emitter(args.color, pattern);
            commands::generate(pattern, options, args.limit, out, &mut emitter)?;
        }
        Command::Count { pattern } => {
            commands::count(pattern, options, out, &mut stderr_emitter(args.color, pattern))?;
        }
        Command::Ir { pattern } => {
            commands::dump_ir(pattern, options, out, &mut stderr_emitter(args.color, pattern))?;
        }
        Command::Check { pattern } => {
            commands::check(pattern, options, out, &mut stderr_emitter(args.color, pattern))?;
        }
        Command::Explain { code } => commands::explain(code, out)?,
        Command::Help => write!(out, "{}", usage())?,
        Command::Version => writeln!(out, "strex {}", env!("CARGO_PKG_VERSION"))?,
    }
    Ok(())
}

fn stderr_emitter(color: ColorMode, pattern: &str) -> TerminalEmitter<io::Stderr> {
    TerminalEmitter::stderr(color, io::stderr().is_terminal()).with_source(pattern)
}
