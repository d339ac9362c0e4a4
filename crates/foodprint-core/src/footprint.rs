//! Product-level footprint aggregation.
//!
//! The aggregator turns an ordered ingredient list into a single nullable
//! footprint value: each quantity is converted to kilograms, each name is
//! normalized and matched against the emission factor catalog, and the
//! matched emissions are summed weighted by mass.
//!
//! One business rule dominates the shape of this module: if the footprint
//! of any single ingredient cannot be established — no matching factor, or
//! a factor whose emission value is null or zero — the footprint of the
//! whole product is null. Partial footprints are never reported.

use foodprint_types::{EmissionFactor, FoodProduct, Ingredient};

use crate::error::Result;
use crate::lookup::FactorLookup;
use crate::normalize::normalize;
use crate::units::convert_to_kilograms;

/// Outcome of a footprint computation.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedFootprint {
    /// Total CO2e kilograms rounded to 2 decimals, or `None` when any
    /// ingredient could not be resolved.
    pub value: Option<f64>,
    /// The internal working copy of the ingredients: normalized names,
    /// quantities converted to kilograms. Callers persist the original
    /// submitted list, not this one.
    pub normalized: Vec<Ingredient>,
}

/// Aggregates per-ingredient emissions into a product footprint.
///
/// Stateless; the catalog is passed per call through [`FactorLookup`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FootprintAggregator;

impl FootprintAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the footprint of `ingredients` against `catalog`.
    ///
    /// Conversion failures (bad quantity or unit) abort the whole
    /// computation; an unresolvable ingredient instead yields
    /// `value: None`. See the module docs for the nullification rule.
    pub fn compute_footprint<C>(
        &self,
        ingredients: &[Ingredient],
        catalog: &C,
    ) -> Result<ComputedFootprint>
    where
        C: FactorLookup + ?Sized,
    {
        let mut normalized = Vec::with_capacity(ingredients.len());
        for ingredient in ingredients {
            normalized.push(Ingredient {
                name: normalize(&ingredient.name),
                quantity: convert_to_kilograms(ingredient.quantity, &ingredient.unit)?,
                unit: "kg".to_string(),
            });
        }

        let names: Vec<String> = normalized.iter().map(|i| i.name.clone()).collect();
        let factors = catalog.find_by_names(&names)?;

        // If the bulk lookup matched nothing at all the result is already
        // decided. The per-ingredient loop below would reach the same
        // conclusion; the explicit check is kept for behavioral parity with
        // the historical rule.
        let mut not_computable = factors.is_empty();

        let mut sum = 0.0;
        for ingredient in &normalized {
            let matching = factors
                .iter()
                .find(|factor| normalize(&factor.name) == ingredient.name);
            match matching.and_then(|f| f.emission_co2e_in_kg_per_unit) {
                Some(emission) if emission != 0.0 => {
                    sum += ingredient.quantity * emission;
                }
                _ => {
                    tracing::debug!(
                        ingredient = %ingredient.name,
                        "no usable emission factor, footprint is not computable"
                    );
                    not_computable = true;
                }
            }
        }

        let value = if not_computable {
            None
        } else {
            Some(round_to_cents(sum))
        };

        Ok(ComputedFootprint { value, normalized })
    }

    /// Compute and package the persist-ready product record: the footprint
    /// plus the *original* ingredient list.
    pub fn product<C>(
        &self,
        name: &str,
        ingredients: &[Ingredient],
        catalog: &C,
    ) -> Result<FoodProduct>
    where
        C: FactorLookup + ?Sized,
    {
        let computed = self.compute_footprint(ingredients, catalog)?;
        Ok(FoodProduct {
            name: name.to_string(),
            carbon_footprint: computed.value,
            ingredients: ingredients.to_vec(),
        })
    }

    /// Compute and package the product as a catalog entry of its own:
    /// per-kilogram, `source = "computed"`.
    pub fn factor<C>(
        &self,
        name: &str,
        ingredients: &[Ingredient],
        catalog: &C,
    ) -> Result<EmissionFactor>
    where
        C: FactorLookup + ?Sized,
    {
        let computed = self.compute_footprint(ingredients, catalog)?;
        Ok(EmissionFactor::computed(name, computed.value))
    }
}

/// Round to 2 decimal places, half away from zero on the scaled value.
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComputeError;

    fn factor(name: &str, emission: Option<f64>) -> EmissionFactor {
        EmissionFactor::new(name, "kg", emission, "Agrybalise").unwrap()
    }

    fn ham_and_beef_catalog() -> Vec<EmissionFactor> {
        vec![factor("ham", Some(0.11)), factor("beef", Some(14.0))]
    }

    #[test]
    fn sums_weighted_emissions() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![
            Ingredient::new("ham", 0.2, "kg"),
            Ingredient::new("beef", 0.15, "kg"),
        ];
        let computed = aggregator
            .compute_footprint(&ingredients, &ham_and_beef_catalog())
            .unwrap();
        // 0.2 * 0.11 + 0.15 * 14 = 2.122 -> 2.12
        assert_eq!(computed.value, Some(2.12));
    }

    #[test]
    fn converts_units_before_weighting() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![
            Ingredient::new("ham", 200.0, "g"),
            Ingredient::new("beef", 150_000.0, "mg"),
        ];
        let computed = aggregator
            .compute_footprint(&ingredients, &ham_and_beef_catalog())
            .unwrap();
        assert_eq!(computed.value, Some(2.12));
    }

    #[test]
    fn one_unknown_ingredient_nullifies_the_product() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![
            Ingredient::new("ham", 0.2, "kg"),
            Ingredient::new("bread", 0.2, "kg"),
        ];
        let computed = aggregator
            .compute_footprint(&ingredients, &ham_and_beef_catalog())
            .unwrap();
        assert_eq!(computed.value, None);
    }

    #[test]
    fn null_emission_value_nullifies_the_product() {
        let catalog = vec![factor("ham", Some(0.11)), factor("mystery", None)];
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![
            Ingredient::new("ham", 0.2, "kg"),
            Ingredient::new("mystery", 0.1, "kg"),
        ];
        let computed = aggregator.compute_footprint(&ingredients, &catalog).unwrap();
        assert_eq!(computed.value, None);
    }

    #[test]
    fn zero_emission_value_nullifies_the_product() {
        let catalog = vec![factor("water", Some(0.0))];
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![Ingredient::new("water", 1.0, "kg")];
        let computed = aggregator.compute_footprint(&ingredients, &catalog).unwrap();
        assert_eq!(computed.value, None);
    }

    #[test]
    fn no_catalog_match_at_all_is_null() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![Ingredient::new("unobtainium", 1.0, "kg")];
        let computed = aggregator
            .compute_footprint(&ingredients, &ham_and_beef_catalog())
            .unwrap();
        assert_eq!(computed.value, None);
    }

    #[test]
    fn empty_ingredient_list_is_null() {
        let aggregator = FootprintAggregator::new();
        let computed = aggregator
            .compute_footprint(&[], &ham_and_beef_catalog())
            .unwrap();
        assert_eq!(computed.value, None);
        assert!(computed.normalized.is_empty());
    }

    #[test]
    fn matches_despite_accents_and_spacing() {
        let catalog = vec![factor("creme fraiche", Some(2.0))];
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![Ingredient::new(" crème   fraîche ", 0.5, "kg")];
        let computed = aggregator.compute_footprint(&ingredients, &catalog).unwrap();
        assert_eq!(computed.value, Some(1.0));
    }

    #[test]
    fn invalid_unit_fails_the_whole_computation() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![
            Ingredient::new("ham", 0.2, "kg"),
            Ingredient::new("beef", 1.0, "l"),
        ];
        let err = aggregator
            .compute_footprint(&ingredients, &ham_and_beef_catalog())
            .unwrap_err();
        assert!(matches!(err, ComputeError::UnsupportedUnit));
    }

    #[test]
    fn zero_quantity_fails_the_whole_computation() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![Ingredient::new("ham", 0.0, "kg")];
        let err = aggregator
            .compute_footprint(&ingredients, &ham_and_beef_catalog())
            .unwrap_err();
        assert!(matches!(err, ComputeError::QuantityNotDefined));
    }

    #[test]
    fn normalized_copy_is_in_kilograms() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![Ingredient::new("Crème brûlée", 250.0, "g")];
        let computed = aggregator
            .compute_footprint(&ingredients, &Vec::new())
            .unwrap();
        assert_eq!(computed.normalized[0].name, "Creme brulee");
        assert_eq!(computed.normalized[0].quantity, 0.25);
        assert_eq!(computed.normalized[0].unit, "kg");
    }

    #[test]
    fn product_keeps_the_submitted_ingredients() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![Ingredient::new("ham", 200.0, "g")];
        let product = aggregator
            .product("hamPlate", &ingredients, &ham_and_beef_catalog())
            .unwrap();
        assert_eq!(product.name, "hamPlate");
        assert_eq!(product.carbon_footprint, Some(0.02));
        // Persisted list keeps the original quantity/unit.
        assert_eq!(product.ingredients[0].quantity, 200.0);
        assert_eq!(product.ingredients[0].unit, "g");
    }

    #[test]
    fn factor_is_computed_per_kilogram() {
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![
            Ingredient::new("ham", 0.2, "kg"),
            Ingredient::new("beef", 0.15, "kg"),
        ];
        let factor = aggregator
            .factor("hamAndBeef", &ingredients, &ham_and_beef_catalog())
            .unwrap();
        assert_eq!(factor.name, "hamAndBeef");
        assert_eq!(factor.emission_co2e_in_kg_per_unit, Some(2.12));
        assert_eq!(factor.unit, "kg");
        assert_eq!(factor.source, "computed");
    }

    #[test]
    fn rounds_to_two_decimals() {
        let catalog = vec![factor("flour", Some(0.14))];
        let aggregator = FootprintAggregator::new();
        let ingredients = vec![Ingredient::new("flour", 0.333, "kg")];
        let computed = aggregator.compute_footprint(&ingredients, &catalog).unwrap();
        // 0.333 * 0.14 = 0.04662 -> 0.05
        assert_eq!(computed.value, Some(0.05));
    }
}
