//! Product filtering and sorting
//!
//! Pure functions over an in-memory catalog slice: same inputs, same
//! ordering, every call. Filters narrow, the sort runs last and is stable.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::Product;

/// Inclusive price bounds: a product qualifies iff `min <= price <= max`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
}

/// A query description. Every field is independently optional; an absent or
/// empty field is no constraint, so the default spec returns the catalog
/// unchanged and in original order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub category_ids: Vec<String>,
    #[serde(default)]
    pub brand_ids: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub in_stock: Option<bool>,
    #[serde(default)]
    pub sort_by: Option<SortKey>,
}

/// Brand is not a first-class product field; the original matched known
/// brand tokens as case-insensitive substrings of the product name. Kept as
/// a named approximation rather than promoted to an exact match.
pub fn matches_brand_heuristic(product: &Product, brands: &[String]) -> bool {
    let name = product.name.to_lowercase();
    brands.iter().any(|b| name.contains(&b.to_lowercase()))
}

fn any_overlap(have: &[String], want: &[String]) -> bool {
    have.iter().any(|v| want.contains(v))
}

/// `Newest` sorts on the numeric value of the id, a recency proxy rather
/// than a timestamp. Ids that do not parse rank lowest.
fn recency_rank(product: &Product) -> u64 {
    product.id.parse().unwrap_or(0)
}

fn matches(product: &Product, spec: &FilterSpec) -> bool {
    if !spec.category_ids.is_empty() && !spec.category_ids.contains(&product.category_id) {
        return false;
    }
    if !spec.brand_ids.is_empty() && !matches_brand_heuristic(product, &spec.brand_ids) {
        return false;
    }
    if !spec.colors.is_empty() && !any_overlap(&product.colors, &spec.colors) {
        return false;
    }
    if !spec.sizes.is_empty() && !any_overlap(&product.sizes, &spec.sizes) {
        return false;
    }
    if let Some(range) = &spec.price_range {
        if !range.contains(product.price.amount()) {
            return false;
        }
    }
    if let Some(in_stock) = spec.in_stock {
        if product.in_stock != in_stock {
            return false;
        }
    }
    true
}

/// Apply `spec` to `catalog`: filters first, then a stable sort. No match
/// yields an empty vec, never an error.
pub fn filter_products(catalog: &[Product], spec: &FilterSpec) -> Vec<Product> {
    let mut result: Vec<Product> = catalog.iter().filter(|p| matches(p, spec)).cloned().collect();
    if let Some(sort) = spec.sort_by {
        result.sort_by(|a, b| match sort {
            SortKey::PriceAsc => a.price.amount().cmp(&b.price.amount()),
            SortKey::PriceDesc => b.price.amount().cmp(&a.price.amount()),
            SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
            SortKey::Newest => recency_rank(b).cmp(&recency_rank(a)),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;

    fn product(id: &str, price: i64, category: &str, in_stock: bool) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Money::usd(Decimal::new(price, 0)),
            original_price: None,
            discount: None,
            images: vec![format!("/img/{id}.jpg")],
            category_id: category.into(),
            rating: 4.0,
            review_count: 10,
            sizes: vec![],
            colors: vec![],
            in_stock,
        }
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_spec_returns_catalog_in_order() {
        let catalog = vec![product("3", 30, "x", true), product("1", 10, "y", true)];
        let out = filter_products(&catalog, &FilterSpec::default());
        assert_eq!(ids(&out), vec!["3", "1"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = vec![
            product("1", 10, "x", true),
            product("2", 20, "y", false),
            product("3", 30, "x", true),
        ];
        let spec = FilterSpec {
            category_ids: vec!["x".into()],
            sort_by: Some(SortKey::PriceDesc),
            ..Default::default()
        };
        let once = filter_products(&catalog, &spec);
        let twice = filter_products(&once, &spec);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn test_price_range_bounds_are_inclusive() {
        let catalog = vec![
            product("a", 10, "x", true),
            product("b", 50, "x", true),
            product("c", 100, "x", true),
            product("d", 101, "x", true),
        ];
        let spec = FilterSpec {
            price_range: Some(PriceRange::new(Decimal::new(10, 0), Decimal::new(100, 0))),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&catalog, &spec)), vec!["a", "b", "c"]);

        // One cent outside either bound is excluded.
        let narrow = FilterSpec {
            price_range: Some(PriceRange::new(Decimal::new(1001, 2), Decimal::new(9999, 2))),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&catalog, &narrow)), vec!["b"]);
    }

    #[test]
    fn test_rating_sort_is_stable_on_ties() {
        let mut a = product("a", 10, "x", true);
        let mut b = product("b", 20, "x", true);
        let mut c = product("c", 30, "x", true);
        a.rating = 4.5;
        b.rating = 4.5;
        c.rating = 5.0;
        let spec = FilterSpec { sort_by: Some(SortKey::Rating), ..Default::default() };
        assert_eq!(ids(&filter_products(&[a, b, c], &spec)), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_newest_sorts_by_numeric_id_descending() {
        let catalog = vec![product("2", 10, "x", true), product("10", 20, "x", true)];
        let spec = FilterSpec { sort_by: Some(SortKey::Newest), ..Default::default() };
        assert_eq!(ids(&filter_products(&catalog, &spec)), vec!["10", "2"]);
    }

    #[test]
    fn test_any_match_on_colors_and_sizes() {
        let mut a = product("a", 10, "x", true);
        a.colors = vec!["red".into(), "blue".into()];
        a.sizes = vec!["M".into()];
        let mut b = product("b", 10, "x", true);
        b.colors = vec!["green".into()];

        let spec = FilterSpec { colors: vec!["blue".into(), "black".into()], ..Default::default() };
        assert_eq!(ids(&filter_products(&[a.clone(), b], &spec)), vec!["a"]);

        // All requested sizes absent excludes the product.
        let spec = FilterSpec { sizes: vec!["XL".into()], ..Default::default() };
        assert!(filter_products(&[a], &spec).is_empty());
    }

    #[test]
    fn test_brand_heuristic_matches_name_substring() {
        let mut p = product("1", 10, "x", true);
        p.name = "Aurora Running Shoe".into();
        assert!(matches_brand_heuristic(&p, &["aurora".into()]));
        assert!(!matches_brand_heuristic(&p, &["Northwind".into()]));
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = vec![product("1", 10, "x", true)];
        let spec = FilterSpec { category_ids: vec!["zzz".into()], ..Default::default() };
        assert!(filter_products(&catalog, &spec).is_empty());
    }

    #[test]
    fn test_price_and_stock_scenario() {
        let catalog = vec![product("A", 100, "x", true), product("B", 500, "y", false)];
        let spec = FilterSpec {
            price_range: Some(PriceRange::new(Decimal::ZERO, Decimal::new(200, 0))),
            in_stock: Some(true),
            ..Default::default()
        };
        assert_eq!(ids(&filter_products(&catalog, &spec)), vec!["A"]);
    }
}
