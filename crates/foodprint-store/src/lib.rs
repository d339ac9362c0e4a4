//! Storage for Foodprint: the emission factor catalog and the food product
//! repository.
//!
//! Both stores are addressed by unique name. Any backend (in-memory,
//! database) implements the traits in [`traits`]; this crate ships the
//! in-memory backend used by the server and tests.
//!
//! # Modules
//!
//! - [`error`] — The store error taxonomy (not-found, conflict, internal)
//! - [`records`] — Persisted record shapes (`{id, ...}`)
//! - [`traits`] — [`EmissionFactorCatalog`] and [`ProductRepository`]
//! - [`memory`] — In-memory [`InMemoryStore`]
//! - [`seed`] — Dev fixture data

pub mod error;
pub mod memory;
pub mod records;
pub mod seed;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use records::{EmissionFactorRecord, FoodProductRecord};
pub use traits::{EmissionFactorCatalog, ProductRepository};
