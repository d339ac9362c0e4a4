//! Food product records.

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::ingredient::Ingredient;

/// Wire name of the footprint field, shared with response shapes that
/// re-project it.
pub const CARBON_FOOTPRINT_FIELD: &str = "carbonFootprint";

/// A named food product with its submitted ingredient list and the computed
/// footprint, if one could be computed.
///
/// The ingredient list is persisted exactly as submitted: quantities and
/// units are never overwritten with the converted values the aggregation
/// uses internally.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodProduct {
    /// Unique product name.
    pub name: String,
    /// Total CO2e kilograms, rounded to 2 decimals. `None` when at least one
    /// ingredient's emission factor is unknown.
    #[serde(rename = "carbonFootprint")]
    pub carbon_footprint: Option<f64>,
    /// Ordered ingredient list as submitted.
    pub ingredients: Vec<Ingredient>,
}

impl FoodProduct {
    /// Build a product, rejecting an empty name.
    pub fn new(
        name: impl Into<String>,
        carbon_footprint: Option<f64>,
        ingredients: Vec<Ingredient>,
    ) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TypeError::EmptyName);
        }
        Ok(Self {
            name,
            carbon_footprint,
            ingredients,
        })
    }
}
