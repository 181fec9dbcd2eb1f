//! The argv classifier.
//!
//! Construction walks the token sequence once, left to right, resolving
//! each token against the argument registry first, then the option
//! registry, then the `-` prefix convention. All state is frozen when the
//! constructor returns; every accessor is read-only.

use argsift_core::{AliasRegistry, ParserSpec, validate_spec};
use tracing::{debug, warn};

use crate::diagnostics::{ClassifiedToken, TokenClass};

/// Classifies an argument vector against a parser spec.
///
/// The constructor performs the entire parse; the resulting value is a
/// read-only query surface that owns every string it stores, so it stays
/// valid after the source argv is gone. Malformed input never fails
/// construction — it is recorded and reported through [`is_invalid`] and
/// [`invalid_tokens`].
///
/// `argv[0]` is taken to be the program name and is skipped.
///
/// # Examples
///
/// ```
/// use argsift_parser::ArgumentParser;
///
/// let argv = ["prog", "-b", "--output", "out.txt", "file.bin"];
/// let parser = ArgumentParser::new(&argv, "-c,-b|--binary", "-o|--output", 1);
///
/// assert!(!parser.is_invalid());
/// assert!(parser.is_option_set("--binary"));
/// assert!(!parser.is_option_set("-c"));
/// assert_eq!(parser.argument_value("-o"), "out.txt");
/// assert_eq!(parser.non_options(), ["file.bin"]);
/// ```
///
/// [`is_invalid`]: ArgumentParser::is_invalid
/// [`invalid_tokens`]: ArgumentParser::invalid_tokens
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    options: AliasRegistry,
    arguments: AliasRegistry,
    options_present: Vec<bool>,
    argument_values: Vec<String>,
    non_options: Vec<String>,
    invalid_tokens: Vec<String>,
    expected_non_options: usize,
    trace: Vec<ClassifiedToken>,
}

impl ArgumentParser {
    /// Parses `argv` against the two spec strings.
    ///
    /// `options` and `arguments` use the comma/pipe grammar
    /// (`"-c,-b|--binary"`); `expected_non_options` is the positional count
    /// a valid invocation carries.
    pub fn new<S: AsRef<str>>(
        argv: &[S],
        options: &str,
        arguments: &str,
        expected_non_options: usize,
    ) -> Self {
        Self::from_spec(argv, &ParserSpec::parse(options, arguments, expected_non_options))
    }

    /// Parses `argv` against an already-built [`ParserSpec`].
    ///
    /// Spec mistakes (duplicate or non-flag-shaped aliases) are caller
    /// programming errors: debug builds assert on them, release builds
    /// proceed with whatever the registries resolve.
    pub fn from_spec<S: AsRef<str>>(argv: &[S], spec: &ParserSpec) -> Self {
        debug_assert!(
            validate_spec(spec).is_empty(),
            "malformed parser spec: {:?}",
            validate_spec(spec)
        );

        let options = AliasRegistry::from_groups(&spec.options);
        let arguments = AliasRegistry::from_groups(&spec.arguments);
        let mut parser = Self {
            options_present: vec![false; options.slot_count()],
            argument_values: vec![String::new(); arguments.slot_count()],
            options,
            arguments,
            non_options: Vec::new(),
            invalid_tokens: Vec::new(),
            expected_non_options: spec.expected_non_options,
            trace: Vec::new(),
        };
        parser.classify(argv);
        parser
    }

    /// Single left-to-right pass; a token consumed as a value is never
    /// re-examined.
    fn classify<S: AsRef<str>>(&mut self, argv: &[S]) {
        let mut index = 1;
        while index < argv.len() {
            let token = argv[index].as_ref();

            if let Some(slot) = self.arguments.slot_of(token) {
                if let Some(value) = argv.get(index + 1) {
                    let value = value.as_ref();
                    debug!(flag = token, value, "value argument");
                    // Last occurrence wins on repeats.
                    self.argument_values[slot] = value.to_string();
                    self.trace
                        .push(ClassifiedToken::new(token, TokenClass::ValueFlag { slot }));
                    self.trace
                        .push(ClassifiedToken::new(value, TokenClass::ValueFor { slot }));
                    index += 2;
                    continue;
                }
                // Value flag at the end of argv: the flag itself is invalid.
                warn!(flag = token, "value argument missing its value");
                self.invalid_tokens.push(token.to_string());
                self.trace
                    .push(ClassifiedToken::new(token, TokenClass::Invalid));
            } else if let Some(slot) = self.options.slot_of(token) {
                debug!(option = token, "option set");
                self.options_present[slot] = true;
                self.trace
                    .push(ClassifiedToken::new(token, TokenClass::OptionFlag { slot }));
            } else if token.starts_with('-') {
                warn!(token, "unrecognized flag");
                self.invalid_tokens.push(token.to_string());
                self.trace
                    .push(ClassifiedToken::new(token, TokenClass::Invalid));
            } else {
                debug!(token, "non-option argument");
                self.non_options.push(token.to_string());
                self.trace
                    .push(ClassifiedToken::new(token, TokenClass::NonOption));
            }

            index += 1;
        }
    }

    /// Returns `true` when the parse failed: a malformed token was seen, or
    /// the positional count differs from the expected count.
    pub fn is_invalid(&self) -> bool {
        !self.invalid_tokens.is_empty() || self.non_options.len() != self.expected_non_options
    }

    /// Flag-shaped tokens that matched no registered alias, plus value
    /// flags that appeared without a value, in encounter order.
    ///
    /// An empty list does not by itself mean the parse succeeded; a
    /// positional-count mismatch also makes it invalid.
    pub fn invalid_tokens(&self) -> &[String] {
        &self.invalid_tokens
    }

    /// Whether the option identified by `alias` appeared in argv.
    ///
    /// Any spelling of the option's group works; an unregistered spelling
    /// returns `false` rather than signaling an error.
    pub fn is_option_set(&self, alias: &str) -> bool {
        self.options
            .slot_of(alias)
            .is_some_and(|slot| self.options_present[slot])
    }

    /// The most recently supplied value for the argument identified by
    /// `alias`, under any spelling of its group.
    ///
    /// Returns the empty string if the argument was never supplied or the
    /// spelling is unregistered.
    pub fn argument_value(&self, alias: &str) -> &str {
        self.arguments
            .slot_of(alias)
            .map(|slot| self.argument_values[slot].as_str())
            .unwrap_or("")
    }

    /// Positional tokens in left-to-right appearance order, excluding
    /// everything consumed as a flag or a flag value.
    pub fn non_options(&self) -> &[String] {
        &self.non_options
    }

    /// Number of collected positional tokens.
    pub fn non_option_count(&self) -> usize {
        self.non_options.len()
    }

    /// The positional count this parser was told to expect.
    pub fn expected_non_option_count(&self) -> usize {
        self.expected_non_options
    }

    /// Per-token classification trace, in encounter order (flag values
    /// appear as their own entries).
    pub fn trace(&self) -> &[ClassifiedToken] {
        &self.trace
    }
}
