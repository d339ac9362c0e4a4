use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{factors, products};
use crate::state::AppState;

/// Build the axum router with all Foodprint endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/carbon-emission-factors",
            get(factors::list).post(factors::create_many),
        )
        .route(
            "/carbon-emission-factors/product",
            axum::routing::post(factors::create_from_product),
        )
        .route("/carbon-emission-factors/:name", get(factors::get_by_name))
        .route("/food-products", axum::routing::post(products::create))
        .route("/food-products/:name", get(products::get_by_name))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
