//! Command-line parsing.

use strex_diagnostic::emitter::ColorMode;
use strex_parse::ParseOptions;

use crate::CliError;

/// A subcommand and its operand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Stream every match, one per line.
    Gen { pattern: String },
    /// Print how many strings `gen` would produce.
    Count { pattern: String },
    /// Print the IR dump.
    Ir { pattern: String },
    /// Validate only; report warnings.
    Check { pattern: String },
    /// Print the documentation of an error code.
    Explain { code: String },
    Help,
    Version,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
    /// `--color=auto|always|never`.
    pub color: ColorMode,
    /// `--limit=N`: stop `gen` after N strings.
    pub limit: Option<usize>,
    /// `--max-repetition=N`: override the largest accepted `{}` bound.
    pub max_repetition: Option<usize>,
}

impl CliArgs {
    /// Parse arguments, excluding the program name.
    ///
    /// Options start with `--` and may appear anywhere; a bare `--` makes
    /// every later argument positional, so `strex gen -- --x` works.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut color = ColorMode::default();
        let mut limit = None;
        let mut max_repetition = None;
        let mut positional = Vec::new();
        let mut flag_command = None;
        let mut options_done = false;

        for arg in args {
            if options_done {
                positional.push(arg);
            } else if arg == "--" {
                options_done = true;
            } else if let Some(value) = arg.strip_prefix("--limit=") {
                limit = Some(parse_number("--limit", value)?);
            } else if let Some(value) = arg.strip_prefix("--max-repetition=") {
                max_repetition = Some(parse_number("--max-repetition", value)?);
            } else if let Some(value) = arg.strip_prefix("--color=") {
                color = value.parse().map_err(CliError::Usage)?;
            } else if arg == "--help" {
                flag_command = Some(Command::Help);
            } else if arg == "--version" {
                flag_command = flag_command.or(Some(Command::Version));
            } else if arg.starts_with("--") {
                return Err(CliError::Usage(format!("unknown option `{arg}`")));
            } else {
                positional.push(arg);
            }
        }

        let with_command = |command| CliArgs {
            command,
            color,
            limit,
            max_repetition,
        };
        if let Some(command) = flag_command {
            return Ok(with_command(command));
        }

        let mut positional = positional.into_iter();
        let Some(name) = positional.next() else {
            return Ok(with_command(Command::Help));
        };

        let mut operand = |what: &str| {
            positional
                .next()
                .ok_or_else(|| CliError::Usage(format!("`strex {name}` needs a {what}")))
        };
        let command = match name.as_str() {
            "gen" | "generate" => Command::Gen {
                pattern: operand("pattern")?,
            },
            "count" => Command::Count {
                pattern: operand("pattern")?,
            },
            "ir" => Command::Ir {
                pattern: operand("pattern")?,
            },
            "check" => Command::Check {
                pattern: operand("pattern")?,
            },
            "explain" => Command::Explain {
                code: operand("code")?,
            },
            "help" | "-h" => Command::Help,
            "version" | "-V" => Command::Version,
            other => return Err(CliError::Usage(format!("unknown command `{other}`"))),
        };

        if let Some(extra) = positional.next() {
            return Err(CliError::Usage(format!("unexpected argument `{extra}`")));
        }

        Ok(with_command(command))
    }

    /// Parser configuration requested on the command line.
    pub fn parse_options(&self) -> ParseOptions {
        match self.max_repetition {
            Some(max) => ParseOptions::new().with_max_repetition(max),
            None => ParseOptions::new(),
        }
    }
}

fn parse_number(flag: &str, value: &str) -> Result<usize, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("{flag} expects a number, got `{value}`")))
}

/// Help text.
pub fn usage() -> &'static str {
    "\
strex: expand a bounded regular expression into every string it matches

Usage: strex <command> [options] <operand>

Commands:
  gen <pattern>        Print every matching string, one per line
  count <pattern>      Print how many strings `gen` would print
  ir <pattern>         Print the compiled pattern
  check <pattern>      Validate a pattern and report warnings
  explain <code>       Explain an error code (e.g., E1003)
  help                 Show this help message
  version              Show version information

Options:
  --limit=<n>          Stop `gen` after n strings
  --max-repetition=<n> Largest accepted `{}` bound (default 65536)
  --color=<mode>       Diagnostics coloring: auto, always, never
  --                   Treat every later argument as an operand

Environment:
  RUST_LOG             Enable tracing output (e.g., strex_parse=debug)
  STREX_LOG_TREE=1     Render tracing output as a tree

Examples:
  strex gen '[ab]{2}'            # aa ab ba bb
  strex gen 'x(1|2|3)' --limit=2
  strex count '[0123456789abcdef]{8}'
  strex ir 'a{2,3}'              # aa(|a)
  strex explain E1004
"
}

#[cfg(test)]
mod tests;
