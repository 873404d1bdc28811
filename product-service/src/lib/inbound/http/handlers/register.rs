use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequestBody>,
) -> Result<(StatusCode, Json<RegisterResponseBody>), ApiError> {
    // Missing fields become empty strings so the service reports them as
    // per-field validation errors instead of a body deserialization failure.
    let command = RegisterUserCommand::new(
        body.name.unwrap_or_default(),
        body.email.unwrap_or_default(),
        body.password.unwrap_or_default(),
    );

    let token = state
        .auth_service
        .register(command)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponseBody { token: token.token }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterRequestBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterResponseBody {
    pub token: String,
}
