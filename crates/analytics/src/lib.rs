//! Sales analytics over the order book and stock ledger.
//!
//! Everything here is a pure function of current state: no caches, no
//! incremental maintenance, nothing to invalidate. Callers re-run the
//! aggregation whenever the inputs change and hand the rows straight to the
//! chart.

pub mod sales_totals;

pub use sales_totals::{SalesTotal, UNKNOWN_PEPTIDE, sales_by_peptide};
