use crate::model::{
    cart::{CartLineModel, CartModel, items_count, total_amount},
    product::ProductModel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub currency: String,
    pub category: String,
    pub stock: i32,
    pub featured: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ProductListResponse {
    pub results: Vec<ProductResponse>,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CartItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_title: String,
    pub product_price: i64,
    pub currency: String,
    pub quantity: i32,
    pub line_total: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CartResponse {
    pub id: i32,
    pub items: Vec<CartItemResponse>,
    pub items_count: i64,
    pub total_amount: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        ProductResponse {
            id: value.product_id,
            title: value.title,
            description: value.description,
            price: value.price,
            currency: value.currency,
            category: value.category,
            stock: value.stock,
            featured: value.featured,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

impl From<CartLineModel> for CartItemResponse {
    fn from(value: CartLineModel) -> Self {
        CartItemResponse {
            id: value.cart_item_id,
            line_total: value.line_total(),
            product_id: value.product_id,
            product_title: value.product_title,
            product_price: value.product_price,
            currency: value.currency,
            quantity: value.quantity,
        }
    }
}

impl CartResponse {
    pub fn new(cart: CartModel, lines: Vec<CartLineModel>) -> Self {
        CartResponse {
            id: cart.cart_id,
            items_count: items_count(&lines),
            total_amount: total_amount(&lines),
            items: lines.into_iter().map(CartItemResponse::from).collect(),
            created_at: cart.created_at.map(|dt| dt.to_string()),
            updated_at: cart.updated_at.map(|dt| dt.to_string()),
        }
    }
}
