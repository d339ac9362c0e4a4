//! `/food-products` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use foodprint_store::FoodProductRecord;

use crate::dto::{self, ProductView};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /food-products/:name`
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ProductView>, ApiError> {
    tracing::info!(%name, "getting food product");
    let record = state.products.find_by_name(&name)?;
    Ok(Json(ProductView {
        name: record.product.name,
        carbon_footprint: record.product.carbon_footprint,
    }))
}

/// `POST /food-products` — compute the footprint and persist the product.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<FoodProductRecord>), ApiError> {
    let parsed = dto::parse_product_body(&body).map_err(ApiError::Validation)?;
    tracing::info!(name = %parsed.name, "creating food product");

    let product = state
        .aggregator
        .product(&parsed.name, &parsed.ingredients, state.catalog.as_ref())?;
    let record = state.products.insert(product)?;
    Ok((StatusCode::CREATED, Json(record)))
}
