use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use super::ApiError;
use super::ProductData;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn list_products(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<ProductData>>), ApiError> {
    let products = state
        .product_service
        .list_products()
        .await
        .map_err(ApiError::from)?;

    // Bare array, no envelope.
    Ok((
        StatusCode::OK,
        Json(products.iter().map(ProductData::from).collect()),
    ))
}
