//! Structural validation of parser specs.
//!
//! The classifier treats a malformed spec as a caller programming error and
//! never fails construction over one; this module gives callers (and the
//! classifier's debug assertions) a way to surface those mistakes instead.
//!
//! # Examples
//!
//! ```
//! use argsift_core::{ParserSpec, ValidationError, validate_spec};
//!
//! let spec = ParserSpec::parse("-c,-b|--binary", "-o|--output", 1);
//! assert!(validate_spec(&spec).is_empty());
//!
//! // "-b" declared as both an option and a value argument
//! let bad = ParserSpec::parse("-b", "-b|--binary", 0);
//! let errors = validate_spec(&bad);
//! assert_eq!(errors, vec![ValidationError::DuplicateAlias("-b".to_string())]);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::ParserSpec;

/// Spec validation errors.
///
/// Each variant describes one structural problem; the `Display` impl gives
/// a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A group contains an empty spelling.
    #[error("alias spelling cannot be empty")]
    EmptyAlias,
    /// A spelling is not flag-shaped (no leading `-`), so the classifier
    /// could never match it.
    #[error("alias is not flag-shaped: {0}")]
    MissingFlagPrefix(String),
    /// The same spelling appears in two groups, counting option and
    /// argument groups together.
    #[error("duplicate alias across groups: {0}")]
    DuplicateAlias(String),
}

/// Validates a parser spec.
///
/// Checks every spelling across both the option and argument groups for
/// emptiness, flag shape, and uniqueness. Stops at the first problem found,
/// the way schema validation should fail fast on caller errors.
///
/// # Examples
///
/// ```
/// use argsift_core::{ParserSpec, ValidationError, validate_spec};
///
/// let bad = ParserSpec::parse("verbose", "", 0);
/// assert_eq!(
///     validate_spec(&bad),
///     vec![ValidationError::MissingFlagPrefix("verbose".to_string())]
/// );
/// ```
pub fn validate_spec(spec: &ParserSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for group in spec.options.iter().chain(spec.arguments.iter()) {
        for alias in &group.aliases {
            if alias.is_empty() {
                errors.push(ValidationError::EmptyAlias);
                return errors;
            }
            if !alias.starts_with('-') {
                errors.push(ValidationError::MissingFlagPrefix(alias.clone()));
                return errors;
            }
            if !seen.insert(alias.as_str()) {
                errors.push(ValidationError::DuplicateAlias(alias.clone()));
                return errors;
            }
        }
    }

    errors
}
