//! Cart line items and derived totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Money, Quantity};

/// A cart line item. At most one exists per product id; `price` is a
/// snapshot taken when the item was added, never re-fetched.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub quantity: Quantity,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl CartItem {
    pub fn line_total(&self) -> Money {
        self.price.multiply(self.quantity.value())
    }
}

/// Checkout pricing knobs: flat shipping and a flat tax rate.
#[derive(Clone, Debug)]
pub struct Pricing {
    pub currency: String,
    pub shipping_flat: Decimal,
    pub tax_rate: Decimal,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            shipping_flat: Decimal::new(1000, 2),
            tax_rate: Decimal::new(8, 2),
        }
    }
}

/// Derived order-of-magnitude totals for a cart. Computed on demand by
/// consumers, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl CartTotals {
    pub fn compute(items: &[CartItem], pricing: &Pricing) -> Self {
        let zero = Money::zero(&pricing.currency);
        if items.is_empty() {
            return Self { subtotal: zero.clone(), shipping: zero.clone(), tax: zero.clone(), total: zero };
        }
        let subtotal = items
            .iter()
            .fold(zero, |acc, i| acc.add(&i.line_total()).unwrap_or(acc));
        let shipping = Money::new(pricing.shipping_flat, &pricing.currency);
        let tax = subtotal.scale(pricing.tax_rate);
        let total = subtotal
            .add(&shipping)
            .and_then(|t| t.add(&tax))
            .unwrap_or_else(|_| subtotal.clone());
        Self { subtotal, shipping, tax, total }
    }
}
