use crate::{
    abstract_trait::refresh_token::command::RefreshTokenCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::CreateRefreshToken, errors::RepositoryError,
    model::refresh_token::RefreshTokenModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct RefreshTokenCommandRepository {
    db_pool: ConnectionPool,
}

impl RefreshTokenCommandRepository {
    pub fn new(db_pool: ConnectionPool) -> Self {
        Self { db_pool }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db_pool.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl RefreshTokenCommandRepositoryTrait for RefreshTokenCommandRepository {
    async fn create(
        &self,
        req: &CreateRefreshToken,
    ) -> Result<RefreshTokenModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, RefreshTokenModel>(
            r#"
            INSERT INTO refresh_tokens (user_id, token, expires_at, revoked, created_at)
            VALUES ($1, $2, $3, FALSE, CURRENT_TIMESTAMP)
            RETURNING refresh_token_id, user_id, token, expires_at, revoked, created_at
            "#,
        )
        .bind(req.user_id)
        .bind(&req.token)
        .bind(req.expires_at)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create refresh token: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn revoke_all_for_user(&self, user_id: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked = TRUE
            WHERE user_id = $1 AND revoked = FALSE
            "#,
        )
        .bind(user_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in revoke_all_for_user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!(
            "🔒 Revoked {} refresh token(s) for user_id {user_id}",
            result.rows_affected()
        );

        Ok(result.rows_affected())
    }
}
