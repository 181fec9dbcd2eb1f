//! Single-pass argv classification against alias-group specs.
//!
//! This crate sorts a process's raw argument vector into three categories —
//! boolean options, value-taking arguments, and positional non-option
//! tokens — and reports every token it could not place. Flags are declared
//! with the compact comma/pipe grammar from [`argsift_core`]
//! (`"-c,-b|--binary"` declares `-c` plus a `-b`/`--binary` alias pair).
//!
//! # Main entry points
//!
//! - [`parse_args`] — classify argv against the two spec strings.
//! - [`ArgumentParser::from_spec`] — classify against a prebuilt
//!   [`ParserSpec`](argsift_core::ParserSpec).
//!
//! Construction performs the entire parse; afterwards the parser is a
//! frozen query surface, safe to share across threads.
//!
//! # Example
//!
//! ```
//! use argsift_parser::parse_args;
//!
//! let argv = ["prog", "-b", "--output", "out.txt", "file.bin"];
//! let parser = parse_args(&argv, "-c,-b|--binary", "-o|--output", 1);
//!
//! assert!(!parser.is_invalid());
//! assert!(parser.is_option_set("-b"));
//! assert_eq!(parser.argument_value("--output"), "out.txt");
//! assert_eq!(parser.non_options(), ["file.bin"]);
//!
//! let argv = ["prog", "-b", "-x", "file.bin"];
//! let parser = parse_args(&argv, "-c,-b|--binary", "-o|--output", 1);
//! assert!(parser.is_invalid());
//! assert_eq!(parser.invalid_tokens(), ["-x"]);
//! ```
//!
//! The parser itself never prints and never exits; callers that want the
//! conventional CLI behavior check [`ArgumentParser::is_invalid`], present
//! [`ArgumentParser::invalid_tokens`] to the user, and terminate with a
//! non-zero status themselves.

mod classifier;
mod diagnostics;

pub use classifier::ArgumentParser;
pub use diagnostics::{ClassifiedToken, TokenClass};

/// Classifies `argv` against the two spec strings.
///
/// Equivalent to [`ArgumentParser::new`]; `argv[0]` is the program name and
/// is skipped.
pub fn parse_args<S: AsRef<str>>(
    argv: &[S],
    options: &str,
    arguments: &str,
    expected_non_options: usize,
) -> ArgumentParser {
    ArgumentParser::new(argv, options, arguments, expected_non_options)
}
