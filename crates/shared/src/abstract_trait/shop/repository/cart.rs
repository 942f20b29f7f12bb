use crate::{
    errors::RepositoryError,
    model::cart::{CartLineModel, CartModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;

/// Lines are keyed by product; a cart holds at most one line per product.
#[async_trait]
pub trait CartRepositoryTrait {
    async fn get_or_create(&self, user_id: i32) -> Result<CartModel, RepositoryError>;

    /// Oldest line first.
    async fn find_lines(&self, cart_id: i32) -> Result<Vec<CartLineModel>, RepositoryError>;

    /// Adds `quantity` to the existing line or opens a new one.
    async fn add_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError>;

    /// Returns false when the cart has no line for the product.
    async fn set_quantity(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError>;

    async fn remove_item(&self, cart_id: i32, product_id: i32) -> Result<bool, RepositoryError>;
}
