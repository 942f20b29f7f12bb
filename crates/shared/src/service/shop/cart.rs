use crate::{
    abstract_trait::shop::{
        repository::{DynCartRepository, DynProductRepository},
        service::CartServiceTrait,
    },
    domain::{
        requests::{AddCartItemRequest, RemoveCartItemRequest, UpdateCartItemRequest},
        responses::{ApiResponse, CartResponse},
    },
    errors::{ServiceError, format_validation_errors},
    model::cart::CartModel,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct CartService {
    product: DynProductRepository,
    cart: DynCartRepository,
    metrics: Metrics,
}

impl CartService {
    pub fn new(product: DynProductRepository, cart: DynCartRepository, metrics: Metrics) -> Self {
        Self {
            product,
            cart,
            metrics,
        }
    }

    async fn cart_for(&self, user_id: i32) -> Result<CartModel, ServiceError> {
        self.cart.get_or_create(user_id).await.map_err(|e| {
            error!("❌ Failed to load cart for user {user_id}: {e:?}");
            ServiceError::Repo(e)
        })
    }

    /// Re-reads the cart so `updated_at` reflects the last change.
    async fn snapshot(&self, user_id: i32) -> Result<CartResponse, ServiceError> {
        let cart = self.cart_for(user_id).await?;
        let lines = self.cart.find_lines(cart.cart_id).await?;
        Ok(CartResponse::new(cart, lines))
    }

    async fn add(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        self.product
            .find_by_id(req.product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".to_string()))?;

        let cart = self.cart_for(user_id).await?;
        self.cart
            .add_item(cart.cart_id, req.product_id, req.quantity)
            .await?;

        info!(
            "🛒 User {user_id} added {} x product {} to cart",
            req.quantity, req.product_id
        );

        Ok(ApiResponse::success(
            "Item added to cart",
            self.snapshot(user_id).await?,
        ))
    }

    async fn update(
        &self,
        user_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.cart_for(user_id).await?;

        let changed = if req.quantity <= 0 {
            self.cart.remove_item(cart.cart_id, req.product_id).await?
        } else {
            self.cart
                .set_quantity(cart.cart_id, req.product_id, req.quantity)
                .await?
        };

        if changed {
            info!(
                "🛒 User {user_id} set product {} quantity to {}",
                req.product_id, req.quantity
            );
        }

        Ok(ApiResponse::success(
            "Cart updated",
            self.snapshot(user_id).await?,
        ))
    }

    async fn remove(
        &self,
        user_id: i32,
        req: &RemoveCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.cart_for(user_id).await?;

        if self.cart.remove_item(cart.cart_id, req.product_id).await? {
            info!("🛒 User {user_id} removed product {} from cart", req.product_id);
        }

        Ok(ApiResponse::success(
            "Item removed from cart",
            self.snapshot(user_id).await?,
        ))
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        Ok(ApiResponse::success(
            "Cart retrieved successfully",
            self.snapshot(user_id).await?,
        ))
    }

    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.add(user_id, req).await;
        self.metrics
            .record_result("add_cart_item", Method::Post, started, &result);
        result
    }

    async fn update_item(
        &self,
        user_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.update(user_id, req).await;
        self.metrics
            .record_result("update_cart_item", Method::Patch, started, &result);
        result
    }

    async fn remove_item(
        &self,
        user_id: i32,
        req: &RemoveCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.remove(user_id, req).await;
        self.metrics
            .record_result("remove_cart_item", Method::Delete, started, &result);
        result
    }
}
