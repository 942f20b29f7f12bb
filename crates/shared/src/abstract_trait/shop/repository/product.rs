use crate::{
    domain::requests::CreateProductRequest, errors::RepositoryError, model::product::ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    /// Newest first, optionally narrowed to one `featured` value.
    async fn find_all(&self, featured: Option<bool>) -> Result<Vec<ProductModel>, RepositoryError>;

    async fn find_by_id(&self, product_id: i32) -> Result<Option<ProductModel>, RepositoryError>;

    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError>;
}
