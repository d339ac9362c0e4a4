//! Persisted record shapes.
//!
//! A record is the stored form of a value type: the value plus the
//! backend-assigned numeric id. The value fields are flattened so records
//! serialize exactly like the value with an extra `id`.

use serde::{Deserialize, Serialize};

use foodprint_types::{EmissionFactor, FoodProduct};

/// A stored emission factor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactorRecord {
    pub id: u64,
    #[serde(flatten)]
    pub factor: EmissionFactor,
}

/// A stored food product.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodProductRecord {
    pub id: u64,
    #[serde(flatten)]
    pub product: FoodProduct,
}
