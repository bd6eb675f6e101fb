#![forbid(unsafe_code)]

//! Command-line argument parsing for the kerf binary.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `KERF_*` prefix; explicit
//! flags win over the environment. Invalid configuration is rejected here,
//! before any wrap pass exists.

use std::env;
use std::process;

use kerf_core::BreakRule;
use kerf_wrap::TraversalMode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
kerf — greedy line wrapper driven by Unicode segmentation

USAGE:
    kerf [OPTIONS] [FILE]

OPTIONS:
    --width=N        Target line width in UTF-16 code units (default: 40)
    --mode=MODE      Traversal mode: 'forward', 'reverse', 'safe-forward',
                     or 'safe-reverse' (default: forward)
    --reverse        Alias for --mode=reverse
    --break=UNITS    Segmentation rule: 'word' or 'grapheme' (default: word)
    --help, -h       Show this help message
    --version, -V    Show version

If FILE is omitted (or given as '-'), input is read from stdin.
Width is measured in code units, not display cells; an unbreakable unit
wider than the target is emitted alone on its own line.

ENVIRONMENT VARIABLES:
    KERF_WIDTH       Override the default width
    KERF_MODE        Override the default traversal mode
    KERF_BREAK       Override the default segmentation rule
    RUST_LOG         Diagnostics filter (e.g. 'kerf=debug'), written to stderr";

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Target line width in code units.
    pub width: usize,
    /// Traversal mode for the wrap pass.
    pub mode: TraversalMode,
    /// Which boundaries to wrap at.
    pub rule: BreakRule,
    /// Input file path; `None` or `"-"` means stdin.
    pub input: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseError {
    Help,
    Version,
    InvalidValue { flag: &'static str, value: String },
    UnknownArg(String),
    ExtraInput(String),
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            width: 40,
            mode: TraversalMode::Forward,
            rule: BreakRule::Word,
            input: None,
        }
    }
}

fn parse_mode(raw: &str) -> Option<TraversalMode> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "forward" => Some(TraversalMode::Forward),
        "reverse" => Some(TraversalMode::Reverse),
        "safe-forward" => Some(TraversalMode::SafeForward),
        "safe-reverse" => Some(TraversalMode::SafeReverse),
        _ => None,
    }
}

fn parse_rule(raw: &str) -> Option<BreakRule> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "word" => Some(BreakRule::Word),
        "grapheme" => Some(BreakRule::Grapheme),
        _ => None,
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse() -> Self {
        match Self::parse_from_env_and_args(env::args().skip(1), |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(ParseError::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Err(ParseError::Version) => {
                println!("kerf {VERSION}");
                process::exit(0);
            }
            Err(ParseError::InvalidValue { flag, value }) => {
                eprintln!("Invalid {flag} value: {value}");
                process::exit(1);
            }
            Err(ParseError::UnknownArg(arg)) => {
                eprintln!("Unknown argument: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
            Err(ParseError::ExtraInput(arg)) => {
                eprintln!("Unexpected extra input file: {arg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    fn parse_from_env_and_args<I, S, F>(args: I, get_env: F) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = get_env("KERF_WIDTH")
            && let Ok(n) = val.trim().parse()
        {
            opts.width = n;
        }
        if let Some(val) = get_env("KERF_MODE")
            && let Some(mode) = parse_mode(&val)
        {
            opts.mode = mode;
        }
        if let Some(val) = get_env("KERF_BREAK")
            && let Some(rule) = parse_rule(&val)
        {
            opts.rule = rule;
        }

        // Parse command-line args (override env vars)
        for arg in args {
            let arg = arg.as_ref();
            match arg {
                "--help" | "-h" => {
                    return Err(ParseError::Help);
                }
                "--version" | "-V" => {
                    return Err(ParseError::Version);
                }
                "--reverse" => {
                    opts.mode = TraversalMode::Reverse;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--width=") {
                        match val.parse() {
                            Ok(n) => opts.width = n,
                            Err(_) => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--width",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--mode=") {
                        match parse_mode(val) {
                            Some(mode) => opts.mode = mode,
                            None => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--mode",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--break=") {
                        match parse_rule(val) {
                            Some(rule) => opts.rule = rule,
                            None => {
                                return Err(ParseError::InvalidValue {
                                    flag: "--break",
                                    value: val.to_string(),
                                });
                            }
                        }
                    } else if other.starts_with("--") && other.len() > 2 {
                        return Err(ParseError::UnknownArg(other.to_string()));
                    } else if opts.input.is_none() {
                        opts.input = Some(other.to_string());
                    } else {
                        return Err(ParseError::ExtraInput(other.to_string()));
                    }
                }
            }
        }

        Ok(opts)
    }

    /// Whether the configured input is stdin.
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        matches!(self.input.as_deref(), None | Some("-"))
    }
}
