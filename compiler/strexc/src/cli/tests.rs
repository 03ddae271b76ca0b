#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<CliArgs, CliError> {
    CliArgs::parse(args.iter().map(|a| (*a).to_string()))
}

#[test]
fn test_gen_with_defaults() {
    let args = parse(&["gen", "[ab]"]).unwrap();
    assert_eq!(
        args.command,
        Command::Gen {
            pattern: "[ab]".to_string()
        }
    );
    assert_eq!(args.color, ColorMode::Auto);
    assert_eq!(args.limit, None);
    assert_eq!(args.max_repetition, None);
}

#[test]
fn test_options_anywhere() {
    let args = parse(&["--color=never", "gen", "a", "--limit=5"]).unwrap();
    assert_eq!(args.color, ColorMode::Never);
    assert_eq!(args.limit, Some(5));
}

#[test]
fn test_double_dash_makes_operands() {
    let args = parse(&["gen", "--", "--a"]).unwrap();
    assert_eq!(
        args.command,
        Command::Gen {
            pattern: "--a".to_string()
        }
    );
}

#[test]
fn test_single_dash_pattern() {
    let args = parse(&["count", "-x"]).unwrap();
    assert_eq!(
        args.command,
        Command::Count {
            pattern: "-x".to_string()
        }
    );
}

#[test]
fn test_each_command() {
    let cases = [
        (vec!["ir", "a"], Command::Ir { pattern: "a".into() }),
        (vec!["check", "a"], Command::Check { pattern: "a".into() }),
        (vec!["explain", "E1001"], Command::Explain { code: "E1001".into() }),
        (vec!["generate", "a"], Command::Gen { pattern: "a".into() }),
        (vec!["help"], Command::Help),
        (vec!["version"], Command::Version),
        (vec![], Command::Help),
        (vec!["gen", "a", "--help"], Command::Help),
        (vec!["--version"], Command::Version),
    ];
    for (argv, expected) in cases {
        assert_eq!(parse(&argv).unwrap().command, expected, "args {argv:?}");
    }
}

#[test]
fn test_usage_errors() {
    let cases: [(&[&str], &str); 6] = [
        (&["gen"], "`strex gen` needs a pattern"),
        (&["explain"], "`strex explain` needs a code"),
        (&["frobnicate"], "unknown command `frobnicate`"),
        (&["gen", "a", "b"], "unexpected argument `b`"),
        (&["--verbose"], "unknown option `--verbose`"),
        (&["gen", "a", "--limit=lots"], "--limit expects a number, got `lots`"),
    ];
    for (argv, message) in cases {
        let err = parse(argv).unwrap_err();
        assert!(err.wants_usage(), "args {argv:?}");
        assert_eq!(err.to_string(), message);
    }
}

#[test]
fn test_bad_color_mode() {
    let err = parse(&["--color=rainbow", "gen", "a"]).unwrap_err();
    assert!(err.to_string().contains("unknown color mode `rainbow`"));
}

#[test]
fn test_parse_options_max_repetition() {
    let args = parse(&["gen", "a", "--max-repetition=10"]).unwrap();
    assert_eq!(args.max_repetition, Some(10));
    assert_eq!(args.parse_options().max_repetition(), 10);

    let defaults = parse(&["gen", "a"]).unwrap();
    assert_eq!(
        defaults.parse_options().max_repetition(),
        strex_parse::DEFAULT_MAX_REPETITION
    );
}

#[test]
fn test_usage_mentions_every_command() {
    let text = usage();
    for command in ["gen", "count", "ir", "check", "explain", "--limit", "--color"] {
        assert!(text.contains(command), "usage is missing {command}");
    }
}
