use crate::{
    abstract_trait::shop::repository::ProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::CreateProductRequest,
    errors::RepositoryError,
    model::product::ProductModel,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct ProductRepository {
    db_pool: ConnectionPool,
}

impl ProductRepository {
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
impl ProductRepositoryTrait for ProductRepository {
    async fn find_all(&self, featured: Option<bool>) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, title, description, price, currency, category,
                   stock, featured, created_at, updated_at
            FROM products
            WHERE $1::BOOLEAN IS NULL OR featured = $1
            ORDER BY created_at DESC, product_id DESC
            "#,
        )
        .bind(featured)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find_all products: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, title, description, price, currency, category,
                   stock, featured, created_at, updated_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in find product {product_id}: {e:?}");
            RepositoryError::from(e)
        })
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (title, description, price, currency, category, stock, featured,
                                  created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING product_id, title, description, price, currency, category,
                      stock, featured, created_at, updated_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.currency)
        .bind(&req.category)
        .bind(req.stock)
        .bind(req.featured)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error in create product: {e:?}");
            RepositoryError::from(e)
        })
    }
}
