//! HTTP server for Foodprint.
//!
//! Exposes the emission factor catalog and food product repository over
//! HTTP, with the derived-computation endpoints that turn an ingredient
//! list into a product footprint.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::build_router;
pub use server::FoodprintServer;
pub use state::AppState;
