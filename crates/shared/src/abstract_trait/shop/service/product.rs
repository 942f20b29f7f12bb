use crate::{
    domain::{
        current_user::CurrentUser,
        requests::{CreateProductRequest, FindProductsRequest},
        responses::{ApiResponse, ProductListResponse, ProductResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(
        &self,
        req: &FindProductsRequest,
    ) -> Result<ApiResponse<ProductListResponse>, ServiceError>;

    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;

    /// Admin only.
    async fn create(
        &self,
        actor: &CurrentUser,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}
