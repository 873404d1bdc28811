use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::product::models::ProductId;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<DeleteProductResponseBody>), ApiError> {
    state
        .product_service
        .delete_product(&ProductId(id))
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::OK,
        Json(DeleteProductResponseBody {
            message: "Product deleted successfully".to_string(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteProductResponseBody {
    pub message: String,
}
