use super::USER_COLUMNS;
use crate::{
    abstract_trait::user::repository::command::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserRequest, RecordLoginRequest},
    errors::RepositoryError,
    model::{role::Role, user::UserModel},
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct UserCommandRepository {
    db_pool: ConnectionPool,
}

impl UserCommandRepository {
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
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            r#"
            INSERT INTO users (email, display_name, password, role, created_at, updated_at)
            VALUES ($1, $2, $3, $4, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, UserModel>(&sql)
            .bind(&req.email)
            .bind(&req.display_name)
            .bind(&req.password)
            .bind(req.role)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in create user: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn update_profile(
        &self,
        user_id: i32,
        display_name: &str,
    ) -> Result<UserModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            r#"
            UPDATE users
            SET display_name = $2, updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, UserModel>(&sql)
            .bind(user_id)
            .bind(display_name)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in update_profile user {user_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn update_role(&self, user_id: i32, role: Role) -> Result<UserModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let sql = format!(
            r#"
            UPDATE users
            SET role = $2, updated_at = CURRENT_TIMESTAMP
            WHERE user_id = $1
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, UserModel>(&sql)
            .bind(user_id)
            .bind(role)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in update_role user {user_id}: {e:?}");
                RepositoryError::from(e)
            })
    }

    async fn record_login(&self, req: &RecordLoginRequest) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query(
            r#"
            UPDATE users
            SET last_login = CURRENT_TIMESTAMP, last_login_ip = $2
            WHERE user_id = $1
            "#,
        )
        .bind(req.user_id)
        .bind(&req.ip_address)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in record_login user {}: {e:?}", req.user_id);
            RepositoryError::from(e)
        })?;

        Ok(())
    }
}
