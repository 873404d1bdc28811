use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::User;
use crate::inbound::http::middleware::CurrentUser;

pub async fn me(
    Extension(current_user): Extension<CurrentUser>,
) -> Result<(StatusCode, Json<MeResponseBody>), ApiError> {
    Ok((
        StatusCode::OK,
        Json(MeResponseBody {
            user: (&current_user.user).into(),
        }),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeResponseBody {
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
