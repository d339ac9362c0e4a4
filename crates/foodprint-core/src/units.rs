//! Quantity-to-kilograms conversion.
//!
//! The footprint model works in kilograms throughout; submitted quantities
//! arrive in whatever mass unit the caller used. Only mass units are
//! supported — converting volumes (e.g. litres) to mass would need a
//! per-ingredient density table and is deliberately not implemented.

use crate::error::{ComputeError, Result};

/// Convert `quantity` expressed in `unit` to kilograms.
///
/// The unit is matched case-insensitively. A zero or NaN quantity and an
/// empty unit are rejected; so is any unit outside `kg`/`g`/`mg`.
///
/// # Examples
///
/// ```
/// use foodprint_core::convert_to_kilograms;
///
/// assert_eq!(convert_to_kilograms(1400.0, "g").unwrap(), 1.4);
/// assert!(convert_to_kilograms(1.0, "l").is_err());
/// ```
pub fn convert_to_kilograms(quantity: f64, unit: &str) -> Result<f64> {
    if quantity == 0.0 || quantity.is_nan() {
        return Err(ComputeError::QuantityNotDefined);
    }
    if unit.is_empty() {
        return Err(ComputeError::UnitNotDefined);
    }

    match unit.to_lowercase().as_str() {
        "kg" => Ok(quantity),
        "g" => Ok(quantity / 1_000.0),
        "mg" => Ok(quantity / 1_000_000.0),
        _ => Err(ComputeError::UnsupportedUnit),
    }
}
