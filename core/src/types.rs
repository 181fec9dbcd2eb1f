//! Spec model for argv classification.
//!
//! This module defines the data types that describe what a parser accepts:
//! [`AliasGroup`] (the interchangeable spellings of one logical flag) and
//! [`ParserSpec`] (the full declaration a classifier is built from). The
//! types derive [`serde`] traits so specs can be stored or shipped as JSON
//! in addition to the compact string grammar handled by
//! [`parse_groups`](crate::parse_groups).

use serde::{Deserialize, Serialize};

/// The set of interchangeable spellings for one logical option or value
/// argument.
///
/// Every spelling in a group resolves to the same slot: setting the flag
/// with one alias and querying it with another observes the same state.
///
/// # Examples
///
/// ```
/// use argsift_core::AliasGroup;
///
/// let binary = AliasGroup::new(["-b", "--binary"]);
/// assert!(binary.matches("-b"));
/// assert!(binary.matches("--binary"));
/// assert!(!binary.matches("-c"));
/// assert_eq!(binary.canonical_name(), "--binary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasGroup {
    /// Accepted spellings (e.g. `"-b"`, `"--binary"`).
    pub aliases: Vec<String>,
}

impl AliasGroup {
    /// Creates a group from any collection of spellings.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsift_core::AliasGroup;
    ///
    /// let count = AliasGroup::new(["-c", "--count"]);
    /// assert_eq!(count.aliases.len(), 2);
    /// ```
    pub fn new<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            aliases: aliases.into_iter().map(Into::into).collect(),
        }
    }

    /// Checks whether `spelling` is one of this group's aliases.
    pub fn matches(&self, spelling: &str) -> bool {
        self.aliases.iter().any(|alias| alias == spelling)
    }

    /// Returns the canonical spelling (the longest alias, which favors the
    /// `--long` form over `-s`).
    ///
    /// # Examples
    ///
    /// ```
    /// use argsift_core::AliasGroup;
    ///
    /// assert_eq!(AliasGroup::new(["-o", "--output"]).canonical_name(), "--output");
    /// assert_eq!(AliasGroup::new(["-c"]).canonical_name(), "-c");
    /// ```
    pub fn canonical_name(&self) -> &str {
        self.aliases
            .iter()
            .max_by_key(|alias| alias.len())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns `true` if the group declares no spellings.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Full declaration of what a classifier accepts: boolean options, value
/// arguments, and how many positional tokens are expected.
///
/// Option groups and argument groups must not share any spelling; see
/// [`validate_spec`](crate::validate_spec).
///
/// # Examples
///
/// ```
/// use argsift_core::ParserSpec;
///
/// let spec = ParserSpec::parse("-c,-b|--binary", "-o|--output", 1);
/// assert_eq!(spec.options.len(), 2);
/// assert_eq!(spec.arguments.len(), 1);
/// assert_eq!(spec.expected_non_options, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserSpec {
    /// Boolean presence/absence flags.
    pub options: Vec<AliasGroup>,
    /// Flags that consume the next token as their value.
    pub arguments: Vec<AliasGroup>,
    /// Number of positional tokens a valid invocation carries.
    pub expected_non_options: usize,
}

impl ParserSpec {
    /// Parses the two spec strings into a full declaration.
    ///
    /// Each string is a comma-delimited list of alias groups; aliases
    /// within a group are pipe-delimited. An empty string declares no
    /// groups.
    ///
    /// # Examples
    ///
    /// ```
    /// use argsift_core::ParserSpec;
    ///
    /// let spec = ParserSpec::parse("-v|--verbose", "", 0);
    /// assert_eq!(spec.options[0].canonical_name(), "--verbose");
    /// assert!(spec.arguments.is_empty());
    /// ```
    pub fn parse(options: &str, arguments: &str, expected_non_options: usize) -> Self {
        Self {
            options: crate::parse_groups(options),
            arguments: crate::parse_groups(arguments),
            expected_non_options,
        }
    }

    /// Adds an option group.
    pub fn with_option(mut self, group: AliasGroup) -> Self {
        self.options.push(group);
        self
    }

    /// Adds a value-argument group.
    pub fn with_argument(mut self, group: AliasGroup) -> Self {
        self.arguments.push(group);
        self
    }

    /// Sets the expected positional count.
    pub fn expecting(mut self, count: usize) -> Self {
        self.expected_non_options = count;
        self
    }
}
