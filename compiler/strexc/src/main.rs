//! strex CLI
//!
//! Expands bounded regular expressions into every string they match.

use std::io::{self, BufWriter};
use std::process::ExitCode;

use strexc::{init_tracing, run, usage, CliArgs};

fn main() -> ExitCode {
    init_tracing();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprint!("{}", usage());
            return ExitCode::FAILURE;
        }
    };

    let mut out = BufWriter::new(io::stdout().lock());
    match run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !err.is_reported() {
                eprintln!("error: {err}");
                if err.wants_usage() {
                    eprintln!();
                    eprint!("{}", usage());
                }
            }
            ExitCode::FAILURE
        }
    }
}
