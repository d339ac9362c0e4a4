//! Emission factor records.
//!
//! An emission factor states how many kilograms of CO2 equivalent are
//! emitted per kilogram of a named ingredient. Factors are immutable once
//! created and are identified by their unique name.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Well-known `source` value for factors produced by a footprint computation.
pub const COMPUTED_SOURCE: &str = "computed";

/// Wire name of the emission value field. Response shapes that re-project
/// the field reference this constant so the casing has a single source of
/// truth.
pub const EMISSION_FIELD: &str = "emissionCO2eInKgPerUnit";

/// CO2-equivalent emission per kilogram of one ingredient.
///
/// The `unit` field is informational display metadata only; computation
/// always treats the emission value as per-kilogram.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactor {
    /// Unique catalog name, stored exactly as submitted.
    pub name: String,
    /// CO2e kilograms emitted per kilogram of this ingredient.
    /// `None` means the emission is unknown or unmeasurable.
    #[serde(rename = "emissionCO2eInKgPerUnit")]
    pub emission_co2e_in_kg_per_unit: Option<f64>,
    /// Display unit. Informational only.
    pub unit: String,
    /// Provenance of the value (e.g. "Agrybalise", "computed"). Non-empty.
    pub source: String,
}

impl EmissionFactor {
    /// Build a factor, rejecting an empty `source`.
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        emission_co2e_in_kg_per_unit: Option<f64>,
        source: impl Into<String>,
    ) -> Result<Self, TypeError> {
        let source = source.into();
        if source.is_empty() {
            return Err(TypeError::EmptySource);
        }
        Ok(Self {
            name: name.into(),
            emission_co2e_in_kg_per_unit,
            unit: unit.into(),
            source,
        })
    }

    /// Build the factor produced by a product footprint computation:
    /// per-kilogram, sourced as "computed".
    pub fn computed(name: impl Into<String>, emission: Option<f64>) -> Self {
        Self {
            name: name.into(),
            emission_co2e_in_kg_per_unit: emission,
            unit: "kg".to_string(),
            source: COMPUTED_SOURCE.to_string(),
        }
    }
}
