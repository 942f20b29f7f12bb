use crate::{
    abstract_trait::shop::repository::CartRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::cart::{CartLineModel, CartModel},
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct CartRepository {
    db_pool: ConnectionPool,
}

impl CartRepository {
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

    async fn touch(
        conn: &mut sqlx::PgConnection,
        cart_id: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE carts SET updated_at = CURRENT_TIMESTAMP WHERE cart_id = $1")
            .bind(cart_id)
            .execute(conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in touch cart {cart_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        Ok(())
    }
}

#[async_trait]
impl CartRepositoryTrait for CartRepository {
    async fn get_or_create(&self, user_id: i32) -> Result<CartModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // The no-op update makes RETURNING yield the existing row on conflict.
        sqlx::query_as::<_, CartModel>(
            r#"
            INSERT INTO carts (user_id, created_at, updated_at)
            VALUES ($1, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING cart_id, user_id, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in get_or_create cart for user {user_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_lines(&self, cart_id: i32) -> Result<Vec<CartLineModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, CartLineModel>(
            r#"
            SELECT
                ci.cart_item_id,
                ci.product_id,
                p.title AS product_title,
                p.price AS product_price,
                p.currency,
                ci.quantity
            FROM cart_items ci
            JOIN products p ON p.product_id = ci.product_id
            WHERE ci.cart_id = $1
            ORDER BY ci.added_at, ci.cart_item_id
            "#,
        )
        .bind(cart_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_lines cart {cart_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn add_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query(
            r#"
            INSERT INTO cart_items (cart_id, product_id, quantity, added_at)
            VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
            ON CONFLICT (cart_id, product_id)
            DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
            "#,
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in add_item {product_id} to cart {cart_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Self::touch(&mut conn, cart_id).await
    }

    async fn set_quantity(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            "UPDATE cart_items SET quantity = $3 WHERE cart_id = $1 AND product_id = $2",
        )
        .bind(cart_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in set_quantity {product_id} in cart {cart_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        Self::touch(&mut conn, cart_id).await?;
        Ok(true)
    }

    async fn remove_item(&self, cart_id: i32, product_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND product_id = $2")
            .bind(cart_id)
            .bind(product_id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Database error in remove_item {product_id} from cart {cart_id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        Self::touch(&mut conn, cart_id).await?;
        Ok(true)
    }
}
