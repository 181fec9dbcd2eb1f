//! Alias-to-slot resolution.
//!
//! Multiple spellings of one logical flag share a single slot index, so the
//! registry is a map from spelling to index over a compact run of slots.
//! Per-slot state (presence booleans, value strings) lives with whoever owns
//! the registry; this type only resolves spellings.

use std::collections::HashMap;

use crate::AliasGroup;

/// Maps every alias spelling onto the slot index shared by its group.
///
/// Slot indices are assigned sequentially in group declaration order, so
/// `slot_count()` equals the number of non-empty groups and the owner can
/// keep per-slot state in a plain `Vec` indexed by the resolved slot.
///
/// # Examples
///
/// ```
/// use argsift_core::{AliasGroup, AliasRegistry};
///
/// let registry = AliasRegistry::from_groups(&[
///     AliasGroup::new(["-c"]),
///     AliasGroup::new(["-b", "--binary"]),
/// ]);
///
/// assert_eq!(registry.slot_count(), 2);
/// assert_eq!(registry.slot_of("-b"), registry.slot_of("--binary"));
/// assert_eq!(registry.slot_of("-x"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AliasRegistry {
    indices: HashMap<String, usize>,
    slots: usize,
}

impl AliasRegistry {
    /// Builds a registry, assigning each non-empty group the next slot.
    pub fn from_groups(groups: &[AliasGroup]) -> Self {
        let mut indices = HashMap::new();
        let mut slots = 0;

        for group in groups {
            if group.is_empty() {
                continue;
            }
            for alias in &group.aliases {
                indices.insert(alias.clone(), slots);
            }
            slots += 1;
        }

        Self { indices, slots }
    }

    /// Resolves a spelling to its slot, or `None` for unregistered input.
    pub fn slot_of(&self, alias: &str) -> Option<usize> {
        self.indices.get(alias).copied()
    }

    /// Checks whether a spelling is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.indices.contains_key(alias)
    }

    /// Returns the number of logical slots (groups).
    pub fn slot_count(&self) -> usize {
        self.slots
    }

    /// Returns `true` when no groups were registered.
    pub fn is_empty(&self) -> bool {
        self.slots == 0
    }
}
