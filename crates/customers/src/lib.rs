//! Customer roster domain module.
//!
//! Plain CRUD over customer records. No merge rule and no uniqueness beyond
//! ids: two customers may share a name, an email, or both.

pub mod directory;

pub use directory::{Customer, CustomerDirectory, CustomerField, CustomerId, CustomerRejection};
