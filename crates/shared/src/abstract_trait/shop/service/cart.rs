use crate::{
    domain::{
        requests::{AddCartItemRequest, RemoveCartItemRequest, UpdateCartItemRequest},
        responses::{ApiResponse, CartResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

/// Every operation works on the caller's cart, creating it on first use.
#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;

    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;

    async fn update_item(
        &self,
        user_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;

    async fn remove_item(
        &self,
        user_id: i32,
        req: &RemoveCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
}
