use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartModel {
    pub cart_id: i32,
    pub user_id: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItemModel {
    pub cart_item_id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub added_at: Option<NaiveDateTime>,
}

/// Cart line joined with the product it points at.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartLineModel {
    pub cart_item_id: i32,
    pub product_id: i32,
    pub product_title: String,
    pub product_price: i64,
    pub currency: String,
    pub quantity: i32,
}

impl CartLineModel {
    pub fn line_total(&self) -> i64 {
        self.product_price * i64::from(self.quantity)
    }
}

/// Number of units across every line.
pub fn items_count(lines: &[CartLineModel]) -> i64 {
    lines.iter().map(|l| i64::from(l.quantity)).sum()
}

pub fn total_amount(lines: &[CartLineModel]) -> i64 {
    lines.iter().map(CartLineModel::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(price: i64, quantity: i32) -> CartLineModel {
        CartLineModel {
            cart_item_id: 1,
            product_id: 1,
            product_title: "Mug".into(),
            product_price: price,
            currency: "GHS".into(),
            quantity,
        }
    }

    #[test]
    fn empty_cart_totals_zero() {
        assert_eq!(items_count(&[]), 0);
        assert_eq!(total_amount(&[]), 0);
    }

    #[test]
    fn totals_sum_quantities_and_line_prices() {
        let lines = vec![line(1250, 2), line(499, 3)];
        assert_eq!(lines[0].line_total(), 2500);
        assert_eq!(items_count(&lines), 5);
        assert_eq!(total_amount(&lines), 2500 + 1497);
    }
}
