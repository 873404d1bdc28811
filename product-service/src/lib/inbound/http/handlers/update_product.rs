use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ProductData;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateProductRequestBody>,
) -> Result<(StatusCode, Json<UpdateProductResponseBody>), ApiError> {
    let command = UpdateProductCommand {
        name: body.name,
        price: body.price,
        category: body.category,
    };

    let product = state
        .product_service
        .update_product(&ProductId(id), command)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::OK,
        Json(UpdateProductResponseBody {
            message: "Success".to_string(),
            product: (&product).into(),
        }),
    ))
}

/// Only submitted fields are updated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateProductRequestBody {
    name: Option<String>,
    price: Option<f64>,
    category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateProductResponseBody {
    pub message: String,
    pub product: ProductData,
}
