use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Prices are stored in minor units of `currency`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductModel {
    pub product_id: i32,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub currency: String,
    pub category: String,
    pub stock: i32,
    pub featured: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
