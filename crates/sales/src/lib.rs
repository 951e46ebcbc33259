//! Sales orders domain module.
//!
//! This crate contains the business rules for sales orders, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage). Orders
//! reference customers and stock entries by id only; nothing here checks
//! those references against the owning collections, and composing an order
//! never consumes ledger stock.

pub mod draft;
pub mod order;

pub use draft::{DraftOrder, LineField};
pub use order::{Order, OrderBook, OrderId, OrderItem, OrderRejection, OrderStatus};
