use serde::{Deserialize, Serialize};
use thiserror::Error;

use pepstock_core::{Entity, EntityId, IdAllocator, find_by_id};

/// Stock entry identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockEntryId(pub EntityId);

impl StockEntryId {
    /// The blank-picker placeholder; never allocated to an entry.
    pub const UNSET: StockEntryId = StockEntryId(EntityId::UNSET);

    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    pub fn is_set(&self) -> bool {
        self.0.is_set()
    }
}

impl core::fmt::Display for StockEntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One peptide's on-hand stock.
///
/// Quantity is signed for arithmetic convenience but never rests below zero;
/// every mutation path through the ledger clamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockEntry {
    id: StockEntryId,
    name: String,
    quantity: i64,
}

impl StockEntry {
    pub fn id(&self) -> StockEntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

impl Entity for StockEntry {
    type Id = StockEntryId;

    fn id(&self) -> StockEntryId {
        self.id
    }
}

/// Outcome of a successful [`StockLedger::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockIntake {
    /// A new entry was created under a fresh id.
    Created(StockEntryId),
    /// The quantity was folded into an existing entry whose name matched
    /// case-insensitively; no new entry was created.
    Merged {
        id: StockEntryId,
        /// The existing entry's name, in its stored casing.
        name: String,
        added: i64,
    },
}

impl StockIntake {
    /// Id of the created or merged-into entry.
    pub fn entry_id(&self) -> StockEntryId {
        match self {
            StockIntake::Created(id) => *id,
            StockIntake::Merged { id, .. } => *id,
        }
    }

    /// Informational message for the caller to surface. Merges produce one;
    /// plain creations do not (callers clear any previous notice instead).
    pub fn notice(&self) -> Option<String> {
        match self {
            StockIntake::Created(_) => None,
            StockIntake::Merged { name, added, .. } => {
                Some(format!("Added {added} to existing {name}"))
            }
        }
    }
}

/// Why an add was declined. The ledger is unchanged in every case.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StockRejection {
    #[error("peptide name cannot be empty")]
    EmptyName,
    #[error("quantity must be positive")]
    NonPositiveQuantity,
}

/// The stock ledger: every peptide the lab holds, with units on hand.
///
/// Peptide identity is the name, compared case-insensitively, not the id.
/// Adding under an existing name merges into that entry instead of creating a
/// duplicate, so the ledger never accumulates two entries whose names differ
/// only by case. [`StockLedger::rename`] is the one deliberate hole in that
/// rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLedger {
    entries: Vec<StockEntry>,
    ids: IdAllocator,
}

impl StockLedger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    /// Ledger with a caller-chosen allocator (deterministic ids for tests
    /// and seeded states).
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            entries: Vec::new(),
            ids,
        }
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: StockEntryId) -> Option<&StockEntry> {
        find_by_id(&self.entries, id)
    }

    /// Name lookup for rendering and aggregation; a dangling id is `None`.
    pub fn name_of(&self, id: StockEntryId) -> Option<&str> {
        self.get(id).map(StockEntry::name)
    }

    /// Add `quantity` units of `name`, merging into an existing entry when
    /// the name already exists case-insensitively.
    ///
    /// The name is matched exactly as entered (no trimming), so `" Peptide"`
    /// and `"Peptide"` are distinct.
    pub fn add(&mut self, name: &str, quantity: i64) -> Result<StockIntake, StockRejection> {
        if name.is_empty() {
            return Err(StockRejection::EmptyName);
        }
        if quantity <= 0 {
            return Err(StockRejection::NonPositiveQuantity);
        }

        let needle = name.to_lowercase();
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|entry| entry.name.to_lowercase() == needle)
        {
            existing.quantity += quantity;
            return Ok(StockIntake::Merged {
                id: existing.id,
                name: existing.name.clone(),
                added: quantity,
            });
        }

        let id = StockEntryId::new(self.ids.allocate());
        self.entries.push(StockEntry {
            id,
            name: name.to_string(),
            quantity,
        });
        Ok(StockIntake::Created(id))
    }

    /// Step the quantity by `delta` (either sign), flooring at zero.
    /// Unknown ids are a no-op.
    pub fn adjust_quantity(&mut self, id: StockEntryId, delta: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.quantity = (entry.quantity + delta).max(0);
        }
    }

    /// Overwrite the quantity, clamping negative input to zero. Unknown ids
    /// are a no-op.
    pub fn set_quantity(&mut self, id: StockEntryId, quantity: i64) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.quantity = quantity.max(0);
        }
    }

    /// Free-form rename of one entry. Does not re-run the merge rule, so a
    /// rename may leave two entries sharing a name; later adds fold into the
    /// first match. Unknown ids are a no-op.
    pub fn rename(&mut self, id: StockEntryId, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.name = name.to_string();
        }
    }

    /// Delete unconditionally, regardless of remaining quantity. Order lines
    /// referencing the entry keep their id and dangle.
    pub fn remove(&mut self, id: StockEntryId) {
        self.entries.retain(|entry| entry.id != id);
    }
}

impl Default for StockLedger {
    fn default() -> Self {
        Self::new()
    }
}
