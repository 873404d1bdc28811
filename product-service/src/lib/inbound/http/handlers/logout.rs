use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

pub async fn logout(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<(StatusCode, Json<LogoutResponseBody>), ApiError> {
    state
        .auth_service
        .logout(&current_user.token)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::OK,
        Json(LogoutResponseBody {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseBody {
    pub message: String,
}
