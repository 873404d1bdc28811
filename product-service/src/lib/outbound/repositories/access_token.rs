use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::user::errors::AuthError;
use crate::domain::user::models::AccessToken;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::AccessTokenRepository;

pub struct PostgresAccessTokenRepository {
    pool: PgPool,
}

impl PostgresAccessTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_row(row: PgRow) -> Result<AccessToken, AuthError> {
        Ok(AccessToken {
            id: row
                .try_get("id")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
            user_id: UserId(
                row.try_get("user_id")
                    .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
            ),
            token: row
                .try_get("token")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
            created_at: row
                .try_get("created_at")
                .map_err(|e| AuthError::DatabaseError(e.to_string()))?,
        })
    }
}

#[async_trait]
impl AccessTokenRepository for PostgresAccessTokenRepository {
    async fn insert(&self, token: AccessToken) -> Result<AccessToken, AuthError> {
        sqlx::query(
            r#"
            INSERT INTO access_tokens (id, user_id, token, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(token.id)
        .bind(token.user_id.0)
        .bind(&token.token)
        .bind(token.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(token)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<AccessToken>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, token, created_at
            FROM access_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.map(Self::map_row).transpose()
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, AuthError> {
        let result = sqlx::query(
            r#"
            DELETE FROM access_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
