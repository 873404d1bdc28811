use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ProductData;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::ports::ProductServicePort;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequestBody>,
) -> Result<(StatusCode, Json<CreateProductResponseBody>), ApiError> {
    let command = CreateProductCommand {
        name: body.name,
        price: body.price,
        category: body.category,
    };

    let product = state
        .product_service
        .create_product(command)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::OK,
        Json(CreateProductResponseBody {
            message: "Success".to_string(),
            product: (&product).into(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductRequestBody {
    name: String,
    price: f64,
    category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateProductResponseBody {
    pub message: String,
    pub product: ProductData,
}
