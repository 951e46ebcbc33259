//! Inventory domain module.
//!
//! This crate contains the business rules for peptide stock, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). The
//! ledger owns its entries and is mutated in place; declined operations
//! leave it untouched.

pub mod ledger;

pub use ledger::{StockEntry, StockEntryId, StockIntake, StockLedger, StockRejection};
