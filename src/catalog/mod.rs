//! In-memory product catalog provider
//!
//! Stands in for the remote document database of the original system and
//! answers every read the storefront needs: lookups, category listings,
//! search, filtered views, and the facet summary for filter UIs.

pub mod filter;
pub mod seed;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::Product;
pub use filter::{filter_products, matches_brand_heuristic, FilterSpec, PriceRange, SortKey};

/// How many related products a detail page shows.
const RELATED_LIMIT: usize = 4;

/// Available filter facets plus the observed price span. Populates filter
/// UI controls; the engine itself never reads this.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterFacets {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub price_min: Decimal,
    pub price_max: Decimal,
}

pub struct Catalog {
    products: Vec<Product>,
    brands: Vec<String>,
}

impl Catalog {
    /// `brands` is the known brand-token list the heuristic brand filter
    /// matches against; it is catalog configuration, not derived data.
    pub fn new(products: Vec<Product>, brands: Vec<String>) -> Self {
        Self { products, brands }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products_by_category(&self, category_id: &str) -> Vec<&Product> {
        self.products.iter().filter(|p| p.category_id == category_id).collect()
    }

    /// Same-category products for a detail page, excluding the product
    /// being viewed, capped at a handful.
    pub fn related_products(&self, category_id: &str, exclude_id: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_id == category_id && p.id != exclude_id)
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Case-insensitive substring search over name and description.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn filtered(&self, spec: &FilterSpec) -> Vec<Product> {
        filter_products(&self.products, spec)
    }

    pub fn filters(&self) -> FilterFacets {
        let mut categories = Vec::new();
        let mut colors = Vec::new();
        let mut sizes = Vec::new();
        for p in &self.products {
            push_unique(&mut categories, &p.category_id);
            for c in &p.colors {
                push_unique(&mut colors, c);
            }
            for s in &p.sizes {
                push_unique(&mut sizes, s);
            }
        }
        let prices: Vec<Decimal> = self.products.iter().map(|p| p.price.amount()).collect();
        FilterFacets {
            categories,
            brands: self.brands.clone(),
            colors,
            sizes,
            price_min: prices.iter().min().copied().unwrap_or(Decimal::ZERO),
            price_max: prices.iter().max().copied().unwrap_or(Decimal::ZERO),
        }
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;

    fn product(id: &str, name: &str, price: i64, category: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            description: format!("The {name} in every color"),
            price: Money::usd(Decimal::new(price, 0)),
            original_price: None,
            discount: None,
            images: vec![format!("/img/{id}.jpg")],
            category_id: category.into(),
            rating: 4.0,
            review_count: 3,
            sizes: vec!["M".into()],
            colors: vec!["black".into()],
            in_stock: true,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                product("1", "Aurora Hoodie", 60, "apparel"),
                product("2", "Aurora Tee", 25, "apparel"),
                product("3", "Northwind Mug", 15, "home"),
                product("4", "Cascade Jacket", 120, "apparel"),
                product("5", "Cascade Beanie", 20, "apparel"),
                product("6", "Cascade Scarf", 30, "apparel"),
            ],
            vec!["Aurora".into(), "Northwind".into(), "Cascade".into()],
        )
    }

    #[test]
    fn test_lookup_by_id() {
        let c = catalog();
        assert_eq!(c.product_by_id("3").unwrap().name, "Northwind Mug");
        assert!(c.product_by_id("nope").is_none());
    }

    #[test]
    fn test_by_category() {
        assert_eq!(catalog().products_by_category("home").len(), 1);
    }

    #[test]
    fn test_related_excludes_self_and_caps() {
        let c = catalog();
        let related = c.related_products("apparel", "1");
        assert_eq!(related.len(), 4);
        assert!(related.iter().all(|p| p.id != "1"));
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let c = catalog();
        assert_eq!(c.search("AURORA").len(), 2);
        assert_eq!(c.search("mug in every").len(), 1);
        assert!(c.search("quantum").is_empty());
    }

    #[test]
    fn test_facets() {
        let facets = catalog().filters();
        assert_eq!(facets.categories, vec!["apparel".to_string(), "home".to_string()]);
        assert_eq!(facets.brands.len(), 3);
        assert_eq!(facets.price_min, Decimal::new(15, 0));
        assert_eq!(facets.price_max, Decimal::new(120, 0));
    }
}
