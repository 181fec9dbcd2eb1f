//! Core spec model and alias resolution for argv classification.
//!
//! This crate defines the foundational types the classifier is built from:
//!
//! - [`AliasGroup`] — the interchangeable spellings of one logical option
//!   or value argument.
//! - [`ParserSpec`] — a full parser declaration (option groups, value
//!   argument groups, expected positional count), parseable from the
//!   compact `"-c,-b|--binary"` string grammar.
//! - [`AliasRegistry`] — the spelling → shared-slot-index map that lets
//!   every alias of a group observe the same state.
//!
//! Validation ([`validate_spec`]) catches caller mistakes such as duplicate
//! spellings across groups or aliases without a leading `-`.
//!
//! # Example
//!
//! ```
//! use argsift_core::*;
//!
//! let spec = ParserSpec::parse("-c,-b|--binary", "-o|--output", 1);
//! assert!(validate_spec(&spec).is_empty());
//!
//! let options = AliasRegistry::from_groups(&spec.options);
//! assert_eq!(options.slot_of("-b"), options.slot_of("--binary"));
//! assert_eq!(options.slot_count(), 2);
//! ```

mod registry;
mod spec;
mod types;
mod validate;

pub use registry::AliasRegistry;
pub use spec::parse_groups;
pub use types::{AliasGroup, ParserSpec};
pub use validate::{ValidationError, validate_spec};
