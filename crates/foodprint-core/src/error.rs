//! Error types for the computation core.

use thiserror::Error;

use crate::lookup::LookupError;

/// Errors that can occur while computing a product footprint.
///
/// The message strings of the three argument variants are part of the API
/// contract and surface verbatim to callers.
#[derive(Debug, Error)]
pub enum ComputeError {
    /// The quantity is zero or not a number.
    #[error("Quantity is not defined")]
    QuantityNotDefined,

    /// The unit string is empty.
    #[error("Unit is not defined")]
    UnitNotDefined,

    /// The unit is not one of the supported mass units.
    #[error("Unit not valid or not implemented")]
    UnsupportedUnit,

    /// The bulk factor lookup failed in the catalog backend.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Convenience type alias for core operations.
pub type Result<T> = std::result::Result<T, ComputeError>;
