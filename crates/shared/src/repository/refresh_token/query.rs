use crate::{
    abstract_trait::refresh_token::query::RefreshTokenQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::refresh_token::RefreshTokenModel,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct RefreshTokenQueryRepository {
    db_pool: ConnectionPool,
}

impl RefreshTokenQueryRepository {
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
impl RefreshTokenQueryRepositoryTrait for RefreshTokenQueryRepository {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, RefreshTokenModel>(
            r#"
            SELECT refresh_token_id, user_id, token, expires_at, revoked, created_at
            FROM refresh_tokens
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_by_token: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_active_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<RefreshTokenModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, RefreshTokenModel>(
            r#"
            SELECT refresh_token_id, user_id, token, expires_at, revoked, created_at
            FROM refresh_tokens
            WHERE user_id = $1
              AND revoked = FALSE
              AND expires_at > (NOW() AT TIME ZONE 'UTC')
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_active_by_user_id {user_id}: {e:?}");
            RepositoryError::from(e)
        })
    }
}
