//! Request handlers, one module per resource.

pub mod factors;
pub mod products;
