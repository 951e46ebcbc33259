//! `pepstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! integer identifiers and their allocator, the `Entity` lookup seam, and the
//! single-row edit-mode tracker shared by the inventory and customer screens.

pub mod edit;
pub mod entity;
pub mod id;

pub use edit::EditSelection;
pub use entity::{Entity, find_by_id};
pub use id::{EntityId, IdAllocator};
