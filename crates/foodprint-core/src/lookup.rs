//! The [`FactorLookup`] seam between the aggregator and the catalog.
//!
//! The aggregator needs exactly one capability from storage: a bulk
//! read of emission factors by name. Keeping that capability behind a
//! trait keeps the core free of any storage backend and lets tests feed
//! the aggregator from a plain vector.

use thiserror::Error;

use foodprint_types::EmissionFactor;

/// A bulk factor lookup failed in the backend.
#[derive(Debug, Error)]
#[error("emission factor lookup failed: {0}")]
pub struct LookupError(pub String);

/// Read-only bulk lookup into the emission factor catalog.
///
/// Implementations return every stored factor whose name is in `names`,
/// matching on the stored name exactly. Missing names are simply absent
/// from the result; an empty result is not an error.
pub trait FactorLookup: Send + Sync {
    fn find_by_names(&self, names: &[String]) -> Result<Vec<EmissionFactor>, LookupError>;
}

impl FactorLookup for Vec<EmissionFactor> {
    fn find_by_names(&self, names: &[String]) -> Result<Vec<EmissionFactor>, LookupError> {
        Ok(self
            .iter()
            .filter(|factor| names.iter().any(|n| n == &factor.name))
            .cloned()
            .collect())
    }
}
