//! Storage traits for the two Foodprint collaborators.
//!
//! Any backend (in-memory, database) implements these traits to provide
//! named-record storage. Implementations must be thread-safe
//! (`Send + Sync`); the unique-name constraint is theirs to enforce —
//! callers never pre-check for duplicates, they rely on [`insert`]
//! surfacing [`StoreError::AlreadyExists`].
//!
//! [`insert`]: EmissionFactorCatalog::insert
//! [`StoreError::AlreadyExists`]: crate::error::StoreError::AlreadyExists

use foodprint_core::FactorLookup;
use foodprint_types::{EmissionFactor, FoodProduct};

use crate::error::Result;
use crate::records::{EmissionFactorRecord, FoodProductRecord};

/// Named storage of emission factors.
///
/// The [`FactorLookup`] supertrait is the read seam the aggregator uses;
/// everything else serves the CRUD surface.
pub trait EmissionFactorCatalog: FactorLookup {
    /// All stored factors, ordered by id.
    fn find_all(&self) -> Result<Vec<EmissionFactorRecord>>;

    /// Read one factor by its exact stored name.
    fn find_by_name(&self, name: &str) -> Result<EmissionFactorRecord>;

    /// Insert a new factor; fails with `AlreadyExists` on a duplicate name.
    fn insert(&self, factor: EmissionFactor) -> Result<EmissionFactorRecord>;

    /// Insert several factors, stopping at the first conflict.
    ///
    /// Not atomic: factors inserted before the conflict stay inserted,
    /// matching the non-transactional write path of the service.
    fn insert_many(&self, factors: Vec<EmissionFactor>) -> Result<Vec<EmissionFactorRecord>> {
        let mut records = Vec::with_capacity(factors.len());
        for factor in factors {
            records.push(self.insert(factor)?);
        }
        Ok(records)
    }
}

/// Named storage of food products.
pub trait ProductRepository: Send + Sync {
    /// Read one product by its exact stored name.
    fn find_by_name(&self, name: &str) -> Result<FoodProductRecord>;

    /// Insert a new product; fails with `AlreadyExists` on a duplicate name.
    fn insert(&self, product: FoodProduct) -> Result<FoodProductRecord>;
}
