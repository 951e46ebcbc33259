//! Integer identifiers and their allocation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Raw entity identifier: a process-unique integer.
///
/// `0` is reserved as [`EntityId::UNSET`], the "nothing selected" value that
/// blank form pickers hand back. It is never allocated, so a set id always
/// denotes an entity that existed at some point (it may still dangle after a
/// deletion).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// The reserved "no selection" identifier.
    pub const UNSET: EntityId = EntityId(0);

    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Whether this id is a real selection rather than the placeholder.
    pub fn is_set(&self) -> bool {
        self.0 != 0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u64> for EntityId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<EntityId> for u64 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

/// Hands out fresh [`EntityId`]s for one owning collection.
///
/// Seeded from the wall clock in milliseconds and bumped monotonically
/// afterwards, so consecutive allocations differ even within the same
/// millisecond. Never yields [`EntityId::UNSET`]. Prefer
/// [`IdAllocator::starting_at`] in tests for determinism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: Utc::now().timestamp_millis().max(1) as u64,
        }
    }

    /// Start allocating at a fixed value (deterministic ids for tests and
    /// seeded states). Zero is bumped to one.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: first.max(1),
        }
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_yields_consecutive_ids() {
        let mut ids = IdAllocator::starting_at(7);
        assert_eq!(ids.allocate(), EntityId::from_raw(7));
        assert_eq!(ids.allocate(), EntityId::from_raw(8));
        assert_eq!(ids.allocate(), EntityId::from_raw(9));
    }

    #[test]
    fn allocator_never_yields_unset() {
        let mut ids = IdAllocator::starting_at(0);
        let first = ids.allocate();
        assert!(first.is_set());
        assert_eq!(first, EntityId::from_raw(1));
    }

    #[test]
    fn unset_is_zero_and_not_set() {
        assert_eq!(EntityId::UNSET.as_u64(), 0);
        assert!(!EntityId::UNSET.is_set());
        assert!(EntityId::from_raw(1).is_set());
    }

    #[test]
    fn clock_seeded_allocators_start_past_unset() {
        let mut ids = IdAllocator::new();
        assert!(ids.allocate().is_set());
    }
}
