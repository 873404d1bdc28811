use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::product::errors::ProductError;
use crate::product::models::Product;
use crate::user::errors::AuthError;
use crate::user::errors::ValidationErrors;

pub mod login;
pub mod logout;
pub mod me;
pub mod register;

pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod update_product;

/// HTTP-level error, mapped from domain errors.
///
/// Response shapes mirror the API contract: 401 `{"error": ...}`,
/// 422 `{"errors": {...}}`, 404 `{"error": ...}`, and a generic 500 whose
/// detail is logged but never returned.
#[derive(Debug, Clone)]
pub enum ApiError {
    Unauthorized(String),
    UnprocessableEntity(ValidationErrors),
    NotFound(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::UnprocessableEntity(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
            }
            ApiError::InternalServerError(message) => {
                tracing::error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AuthError::InvalidToken => ApiError::Unauthorized(err.to_string()),
            AuthError::Validation(errors) => ApiError::UnprocessableEntity(errors),
            AuthError::InvalidUserId(_)
            | AuthError::InvalidEmail(_)
            | AuthError::Password(_)
            | AuthError::EmailAlreadyExists(_)
            | AuthError::DatabaseError(_)
            | AuthError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound(err.to_string()),
            ProductError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// Product representation returned by every product endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub category: String,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_statuses() {
        let unauthorized = ApiError::from(AuthError::InvalidCredentials);
        assert!(matches!(unauthorized, ApiError::Unauthorized(_)));

        let mut errors = ValidationErrors::new();
        errors.add("name", "The name field is required.");
        let unprocessable = ApiError::from(AuthError::Validation(errors));
        assert!(matches!(unprocessable, ApiError::UnprocessableEntity(_)));

        let fault = ApiError::from(AuthError::DatabaseError("connection reset".to_string()));
        assert!(matches!(fault, ApiError::InternalServerError(_)));
    }

    #[test]
    fn test_product_errors_map_to_statuses() {
        let not_found = ApiError::from(ProductError::NotFound(3));
        assert!(matches!(not_found, ApiError::NotFound(_)));

        let fault = ApiError::from(ProductError::DatabaseError("timeout".to_string()));
        assert!(matches!(fault, ApiError::InternalServerError(_)));
    }
}
