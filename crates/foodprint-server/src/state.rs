//! Shared request state: the two store handles and the aggregator.

use std::sync::Arc;

use foodprint_core::FootprintAggregator;
use foodprint_store::{EmissionFactorCatalog, ProductRepository};

/// Handles shared by every request handler.
///
/// The store handles are explicitly owned trait objects passed by
/// reference-counting — no ambient global connection state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn EmissionFactorCatalog>,
    pub products: Arc<dyn ProductRepository>,
    pub aggregator: FootprintAggregator,
}

impl AppState {
    /// Build the state from one backend implementing both store traits.
    pub fn new<S>(store: Arc<S>) -> Self
    where
        S: EmissionFactorCatalog + ProductRepository + 'static,
    {
        Self {
            catalog: store.clone(),
            products: store,
            aggregator: FootprintAggregator::new(),
        }
    }
}
