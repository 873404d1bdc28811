use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use super::ProductData;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<GetProductResponseBody>), ApiError> {
    let product = state
        .product_service
        .get_product(&ProductId(id))
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::OK,
        Json(GetProductResponseBody {
            message: "Success".to_string(),
            product: (&product).into(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetProductResponseBody {
    pub message: String,
    pub product: ProductData,
}
