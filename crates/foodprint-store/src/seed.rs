//! Dev fixture data.
//!
//! A small per-kilogram factor table plus one product, used by `serve
//! --seed` and by endpoint tests. The ham/beef pair is the canonical
//! aggregation fixture: `0.2 * 0.11 + 0.15 * 14 = 2.122 -> 2.12`.

use foodprint_types::{EmissionFactor, FoodProduct, Ingredient};

use crate::error::Result;
use crate::traits::{EmissionFactorCatalog, ProductRepository};

const DEV_FACTORS: &[(&str, f64)] = &[
    ("ham", 0.11),
    ("cheese", 0.12),
    ("tomato", 0.13),
    ("flour", 0.14),
    ("oliveOil", 0.15),
    ("vinegar", 0.91),
    ("chocolate", 2.3),
    ("beef", 14.0),
];

/// The fixture emission factor for `name`.
///
/// # Panics
///
/// Panics if `name` is not part of the fixture table; fixtures are reached
/// by literal name from tests only.
pub fn test_emission_factor(name: &str) -> EmissionFactor {
    let (name, emission) = DEV_FACTORS
        .iter()
        .find(|(n, _)| *n == name)
        .unwrap_or_else(|| panic!("no fixture emission factor named {name}"));
    EmissionFactor::new(*name, "kg", Some(*emission), "Agrybalise")
        .expect("fixture factors are valid")
}

/// All fixture emission factors.
pub fn dev_emission_factors() -> Vec<EmissionFactor> {
    DEV_FACTORS
        .iter()
        .map(|(name, _)| test_emission_factor(name))
        .collect()
}

/// The fixture product.
pub fn vinaigrette() -> FoodProduct {
    FoodProduct::new(
        "vinaigrette",
        Some(0.16),
        vec![
            Ingredient::new("oliveOil", 0.15, "kg"),
            Ingredient::new("vinegar", 0.15, "kg"),
        ],
    )
    .expect("fixture product is valid")
}

/// Load all fixtures into `store`.
pub fn seed_dev_data<S>(store: &S) -> Result<()>
where
    S: EmissionFactorCatalog + ProductRepository,
{
    EmissionFactorCatalog::insert_many(store, dev_emission_factors())?;
    ProductRepository::insert(store, vinaigrette())?;
    Ok(())
}
