//! Request body shapes and field-level validation.
//!
//! Bodies are validated over the raw JSON value before any domain logic
//! runs, so that every offending field is reported in one response. The
//! message phrasing (`"name must be a string"`,
//! `"ingredients.0.quantity must be a number conforming to the specified
//! constraints"`) is part of the API contract and kept verbatim.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use foodprint_types::{Ingredient, CARBON_FOOTPRINT_FIELD, EMISSION_FIELD};

const NUMBER_CONSTRAINT: &str = "must be a number conforming to the specified constraints";

/// Validated body of `POST /food-products` and
/// `POST /carbon-emission-factors/product`.
#[derive(Clone, Debug)]
pub struct CreateProductBody {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
}

/// Validated element of the `POST /carbon-emission-factors` array.
#[derive(Clone, Debug)]
pub struct CreateFactorBody {
    pub name: String,
    pub unit: String,
    pub emission_co2e_in_kg_per_unit: f64,
    pub source: String,
}

/// Response shape of `GET /carbon-emission-factors/:name`.
///
/// Serialization is written by hand so the wire casing comes from the
/// constants `foodprint-types` owns, not from a second spelling here.
#[derive(Debug)]
pub struct FactorView {
    pub name: String,
    pub emission_co2e_in_kg_per_unit: Option<f64>,
    pub source: String,
}

impl Serialize for FactorView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FactorView", 3)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field(EMISSION_FIELD, &self.emission_co2e_in_kg_per_unit)?;
        state.serialize_field("source", &self.source)?;
        state.end()
    }
}

/// Response shape of `GET /food-products/:name`.
#[derive(Debug)]
pub struct ProductView {
    pub name: String,
    pub carbon_footprint: Option<f64>,
}

impl Serialize for ProductView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProductView", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field(CARBON_FOOTPRINT_FIELD, &self.carbon_footprint)?;
        state.end()
    }
}

/// Extract a string field; `label` is the dotted path used in messages.
fn string_field(value: &Value, key: &str, label: &str, errors: &mut Vec<String>) -> String {
    match value.get(key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => {
            errors.push(format!("{label} must be a string"));
            String::new()
        }
    }
}

fn number_field(value: &Value, key: &str, label: &str, errors: &mut Vec<String>) -> f64 {
    match value.get(key).and_then(Value::as_f64) {
        Some(n) => n,
        None => {
            errors.push(format!("{label} {NUMBER_CONSTRAINT}"));
            0.0
        }
    }
}

fn parse_ingredient(index: usize, value: &Value, errors: &mut Vec<String>) -> Ingredient {
    Ingredient {
        name: string_field(value, "name", &format!("ingredients.{index}.name"), errors),
        quantity: number_field(
            value,
            "quantity",
            &format!("ingredients.{index}.quantity"),
            errors,
        ),
        unit: string_field(value, "unit", &format!("ingredients.{index}.unit"), errors),
    }
}

/// Validate a product creation body.
///
/// Returns every field error at once; the returned body is only meaningful
/// when the error list is empty.
pub fn parse_product_body(value: &Value) -> Result<CreateProductBody, Vec<String>> {
    let mut errors = Vec::new();

    let name = string_field(value, "name", "name", &mut errors);
    let ingredients = match value.get("ingredients").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| parse_ingredient(i, item, &mut errors))
            .collect(),
        None => {
            errors.push("ingredients must be an array".to_string());
            Vec::new()
        }
    };

    if errors.is_empty() {
        Ok(CreateProductBody { name, ingredients })
    } else {
        Err(errors)
    }
}

/// Validate the `POST /carbon-emission-factors` array body.
///
/// Element errors are prefixed with the element index
/// (`"0.name must be a string"`).
pub fn parse_factor_array(value: &Value) -> Result<Vec<CreateFactorBody>, Vec<String>> {
    let Some(items) = value.as_array() else {
        return Err(vec!["body must be an array".to_string()]);
    };

    let mut errors = Vec::new();
    let factors = items
        .iter()
        .enumerate()
        .map(|(i, item)| CreateFactorBody {
            name: string_field(item, "name", &format!("{i}.name"), &mut errors),
            unit: string_field(item, "unit", &format!("{i}.unit"), &mut errors),
            emission_co2e_in_kg_per_unit: number_field(
                item,
                "emissionCO2eInKgPerUnit",
                &format!("{i}.emissionCO2eInKgPerUnit"),
                &mut errors,
            ),
            source: string_field(item, "source", &format!("{i}.source"), &mut errors),
        })
        .collect();

    if errors.is_empty() {
        Ok(factors)
    } else {
        Err(errors)
    }
}
