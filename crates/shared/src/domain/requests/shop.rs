use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_quantity() -> i32 {
    1
}

fn default_currency() -> String {
    "GHS".to_string()
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Minor units of `currency`.
    #[validate(range(min = 0, message = "Price must not be negative"))]
    pub price: i64,

    #[serde(default = "default_currency")]
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Category is too long"))]
    pub category: String,

    #[serde(default)]
    #[validate(range(min = 0, message = "Stock must not be negative"))]
    pub stock: i32,

    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindProductsRequest {
    /// Only products whose `featured` flag matches.
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AddCartItemRequest {
    pub product_id: i32,

    #[serde(default = "default_quantity")]
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// A quantity of zero or less drops the line.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateCartItemRequest {
    #[serde(alias = "item_id")]
    pub product_id: i32,

    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RemoveCartItemRequest {
    #[serde(alias = "item_id")]
    pub product_id: i32,
}
