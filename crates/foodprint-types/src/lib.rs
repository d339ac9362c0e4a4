//! Domain value types for Foodprint.
//!
//! This crate provides the core value records used throughout the Foodprint
//! system. Every other Foodprint crate depends on `foodprint-types`.
//!
//! # Key Types
//!
//! - [`EmissionFactor`] — CO2e kilograms emitted per kilogram of an ingredient
//! - [`FoodProduct`] — a named product with its ingredient list and footprint
//! - [`Ingredient`] — a transient `{name, quantity, unit}` triple
//!
//! All types are plain immutable records with validating constructors; they
//! carry no storage or transport concerns.

pub mod emission_factor;
pub mod error;
pub mod food_product;
pub mod ingredient;

pub use emission_factor::{EmissionFactor, EMISSION_FIELD};
pub use error::TypeError;
pub use food_product::{FoodProduct, CARBON_FOOTPRINT_FIELD};
pub use ingredient::Ingredient;
