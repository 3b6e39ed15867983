//! Demo catalog data
//!
//! A small fixed dataset for the demo binary and end-to-end tests. Ids are
//! numeric strings because the `Newest` sort ranks them numerically.

use rust_decimal::Decimal;

use crate::catalog::Catalog;
use crate::domain::{Money, Product};

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    original_price: Option<i64>,
    category: &'static str,
    rating: f32,
    review_count: u32,
    sizes: &'static [&'static str],
    colors: &'static [&'static str],
    in_stock: bool,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "1",
        name: "Aurora Hoodie",
        description: "Heavyweight fleece hoodie with a brushed interior.",
        price: 6500,
        original_price: Some(8000),
        category: "apparel",
        rating: 4.6,
        review_count: 128,
        sizes: &["S", "M", "L", "XL"],
        colors: &["black", "heather", "navy"],
        in_stock: true,
    },
    Seed {
        id: "2",
        name: "Aurora Tee",
        description: "Midweight organic cotton tee.",
        price: 2400,
        original_price: None,
        category: "apparel",
        rating: 4.3,
        review_count: 86,
        sizes: &["S", "M", "L"],
        colors: &["white", "black"],
        in_stock: true,
    },
    Seed {
        id: "3",
        name: "Northwind Field Jacket",
        description: "Water-resistant shell with a packable hood.",
        price: 14900,
        original_price: None,
        category: "apparel",
        rating: 4.8,
        review_count: 54,
        sizes: &["M", "L", "XL"],
        colors: &["olive", "black"],
        in_stock: false,
    },
    Seed {
        id: "4",
        name: "Northwind Trail Sock",
        description: "Merino blend crew sock, cushioned sole.",
        price: 1600,
        original_price: None,
        category: "accessories",
        rating: 4.1,
        review_count: 212,
        sizes: &["M", "L"],
        colors: &["grey", "rust"],
        in_stock: true,
    },
    Seed {
        id: "5",
        name: "Cascade Enamel Mug",
        description: "Double-walled enamel camp mug.",
        price: 1800,
        original_price: Some(2200),
        category: "home",
        rating: 4.5,
        review_count: 73,
        sizes: &[],
        colors: &["cream", "forest"],
        in_stock: true,
    },
    Seed {
        id: "6",
        name: "Cascade Throw Blanket",
        description: "Recycled wool throw, jacquard weave.",
        price: 9800,
        original_price: None,
        category: "home",
        rating: 4.7,
        review_count: 41,
        sizes: &[],
        colors: &["forest", "ember"],
        in_stock: true,
    },
];

/// Build the seeded demo catalog.
pub fn seed() -> Catalog {
    let products = SEEDS
        .iter()
        .map(|s| Product {
            id: s.id.into(),
            name: s.name.into(),
            description: s.description.into(),
            price: Money::usd(Decimal::new(s.price, 2)),
            original_price: s.original_price.map(|p| Money::usd(Decimal::new(p, 2))),
            discount: None,
            images: vec![format!("/images/products/{}.jpg", s.id)],
            category_id: s.category.into(),
            rating: s.rating,
            review_count: s.review_count,
            sizes: s.sizes.iter().map(|v| v.to_string()).collect(),
            colors: s.colors.iter().map(|v| v.to_string()).collect(),
            in_stock: s.in_stock,
        })
        .collect();
    Catalog::new(
        products,
        vec!["Aurora".to_string(), "Northwind".to_string(), "Cascade".to_string()],
    )
}
