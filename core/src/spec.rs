//! Grammar parsing for the compact spec-string form.
//!
//! A spec string is a comma-delimited list of alias groups; within a group,
//! interchangeable spellings are pipe-delimited. `"-c,-b|--binary"` declares
//! two logical flags: one spelled `-c`, one spelled `-b` or `--binary`.

use crate::AliasGroup;

/// Parses a spec string into its alias groups.
///
/// Empty spellings produced by stray delimiters are skipped, and groups
/// left with no spellings declare nothing; malformed syntax never fails.
/// Callers who want those mistakes surfaced can run the result through
/// [`validate_spec`](crate::validate_spec).
///
/// # Examples
///
/// ```
/// use argsift_core::parse_groups;
///
/// let groups = parse_groups("-c,-b|--binary");
/// assert_eq!(groups.len(), 2);
/// assert!(groups[0].matches("-c"));
/// assert!(groups[1].matches("--binary"));
///
/// assert!(parse_groups("").is_empty());
/// ```
pub fn parse_groups(spec: &str) -> Vec<AliasGroup> {
    if spec.is_empty() {
        return Vec::new();
    }

    spec.split(',')
        .map(|fragment| {
            AliasGroup::new(
                fragment
                    .split('|')
                    .filter(|spelling| !spelling.is_empty()),
            )
        })
        .filter(|group| !group.is_empty())
        .collect()
}
