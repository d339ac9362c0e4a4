//! Carbon footprint computation core.
//!
//! This crate holds the only non-trivial logic in Foodprint: converting
//! ingredient quantities to kilograms, canonicalizing names so superficially
//! different spellings match, and aggregating per-ingredient emissions into
//! a product-level footprint.
//!
//! # Modules
//!
//! - [`error`] — Error types for the computation core
//! - [`units`] — Quantity-to-kilograms conversion
//! - [`normalize`] — Accent folding and whitespace collapsing
//! - [`lookup`] — The [`FactorLookup`] seam into the emission factor catalog
//! - [`footprint`] — The [`FootprintAggregator`]
//!
//! Everything here is pure: no I/O, no shared mutable state, freely callable
//! from concurrent request handlers.

pub mod error;
pub mod footprint;
pub mod lookup;
pub mod normalize;
pub mod units;

pub use error::{ComputeError, Result};
pub use footprint::{ComputedFootprint, FootprintAggregator};
pub use lookup::{FactorLookup, LookupError};
pub use normalize::normalize;
pub use units::convert_to_kilograms;
