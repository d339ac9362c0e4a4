use thiserror::Error;

/// Errors produced by value-type constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("source must not be empty")]
    EmptySource,

    #[error("name must not be empty")]
    EmptyName,
}
