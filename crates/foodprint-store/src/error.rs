//! The store error taxonomy.
//!
//! The rendered messages are part of the HTTP contract and must stay
//! verbatim: `"<Entity> '<name>' already exists"` for conflicts and
//! `"<Entity> <name> not found"` for missing records.

use thiserror::Error;

/// Display labels used in store error messages.
pub const FACTOR_ENTITY: &str = "Carbon Emission factor";
pub const PRODUCT_ENTITY: &str = "Food Product";

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record under this name.
    #[error("{entity} {name} not found")]
    NotFound { entity: &'static str, name: String },

    /// The unique-name constraint rejected an insert.
    #[error("{entity} '{name}' already exists")]
    AlreadyExists { entity: &'static str, name: String },

    /// Unexpected backend failure.
    #[error("internal store error: {0}")]
    Internal(String),
}

/// Convenience type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
