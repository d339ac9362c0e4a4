//! The transient ingredient triple submitted with a product.

use serde::{Deserialize, Serialize};

/// One ingredient line of a product: a free-text name, a quantity, and the
/// unit the quantity is expressed in.
///
/// Ingredients are never persisted on their own; they travel inside a
/// [`FoodProduct`](crate::FoodProduct) and are matched against the emission
/// factor catalog by normalized name only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name as submitted (matching normalizes both sides later).
    pub name: String,
    /// Quantity in `unit`.
    pub quantity: f64,
    /// Mass unit the quantity is expressed in (`kg`, `g`, `mg`).
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_submitted() {
        let ingredient = Ingredient::new("oliveOil", 0.3, "kg");
        let json = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "oliveOil", "quantity": 0.3, "unit": "kg"})
        );
    }
}
