//! UI-facing facade: one owned value bundling the stock ledger, customer
//! directory, order book, and per-screen session state.
//!
//! The embedding shell owns an [`AppState`] and calls these methods from its
//! event handlers. Everything is a short, synchronous `&mut self` transition;
//! nothing is persisted and nothing runs in the background, so a
//! multi-threaded shell wraps the whole state in a `Mutex` and is done.

pub mod state;
pub mod views;

pub use state::AppState;
pub use views::{LineSummary, OrderSummary, order_summary};
