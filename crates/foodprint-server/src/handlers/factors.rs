//! `/carbon-emission-factors` handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;

use foodprint_store::EmissionFactorRecord;
use foodprint_types::EmissionFactor;

use crate::dto::{self, FactorView};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /carbon-emission-factors`
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmissionFactorRecord>>, ApiError> {
    tracing::info!("getting all emission factors");
    Ok(Json(state.catalog.find_all()?))
}

/// `POST /carbon-emission-factors` — bulk submission of measured factors.
pub async fn create_many(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Vec<EmissionFactorRecord>>), ApiError> {
    let factors = dto::parse_factor_array(&body).map_err(ApiError::Validation)?;
    tracing::info!(count = factors.len(), "creating emission factors");

    let mut validated = Vec::with_capacity(factors.len());
    for factor in factors {
        validated.push(EmissionFactor::new(
            factor.name,
            factor.unit,
            Some(factor.emission_co2e_in_kg_per_unit),
            factor.source,
        )?);
    }
    let records = state.catalog.insert_many(validated)?;
    Ok((StatusCode::CREATED, Json(records)))
}

/// `GET /carbon-emission-factors/:name`
pub async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<FactorView>, ApiError> {
    tracing::info!(%name, "getting emission factor");
    let record = state.catalog.find_by_name(&name)?;
    Ok(Json(FactorView {
        name: record.factor.name,
        emission_co2e_in_kg_per_unit: record.factor.emission_co2e_in_kg_per_unit,
        source: record.factor.source,
    }))
}

/// `POST /carbon-emission-factors/product` — derive a factor from a
/// product's ingredient list and persist it as a catalog entry of its own.
pub async fn create_from_product(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<EmissionFactorRecord>), ApiError> {
    let product = dto::parse_product_body(&body).map_err(ApiError::Validation)?;
    tracing::info!(name = %product.name, "computing emission factor from product");

    let factor = state
        .aggregator
        .factor(&product.name, &product.ingredients, state.catalog.as_ref())?;
    let record = state.catalog.insert(factor)?;
    Ok((StatusCode::CREATED, Json(record)))
}
