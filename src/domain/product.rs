//! Catalog product record
//!
//! Products are read-only from the core's perspective; the catalog provider
//! owns and supplies them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Money;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub original_price: Option<Money>,
    /// Advertised discount percentage, when the catalog supplies one.
    pub discount: Option<u8>,
    /// Ordered image URIs; a valid product carries at least one.
    pub images: Vec<String>,
    pub category_id: String,
    /// 0.0 to 5.0
    pub rating: f32,
    pub review_count: u32,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .as_ref()
            .map(|orig| orig.amount() > self.price.amount())
            .unwrap_or(false)
    }

    /// Discount derived from the current and original price, when both are
    /// present and the product is actually marked down.
    pub fn discount_percentage(&self) -> Option<Decimal> {
        self.original_price.as_ref().and_then(|orig| {
            if orig.amount() > self.price.amount() && !orig.amount().is_zero() {
                let savings = orig.amount() - self.price.amount();
                Some(savings / orig.amount() * Decimal::from(100))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: i64, original: Option<i64>) -> Product {
        Product {
            id: "1".into(),
            name: "Test Product".into(),
            description: String::new(),
            price: Money::usd(Decimal::new(price, 0)),
            original_price: original.map(|o| Money::usd(Decimal::new(o, 0))),
            discount: None,
            images: vec!["/img/1.jpg".into()],
            category_id: "c1".into(),
            rating: 4.0,
            review_count: 10,
            sizes: vec![],
            colors: vec![],
            in_stock: true,
        }
    }

    #[test]
    fn test_on_sale() {
        assert!(product(20, Some(30)).is_on_sale());
        assert!(!product(20, Some(20)).is_on_sale());
        assert!(!product(20, None).is_on_sale());
    }

    #[test]
    fn test_discount_percentage() {
        let d = product(20, Some(30)).discount_percentage().unwrap();
        assert!((d - Decimal::new(3333, 2)).abs() < Decimal::new(1, 1));
    }
}
