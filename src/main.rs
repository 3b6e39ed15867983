//! NextShop - scripted storefront demo session

use std::sync::Arc;

use anyhow::Result;
use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nextshop_core::catalog::{seed, FilterSpec, PriceRange, SortKey};
use nextshop_core::config::CoreConfig;
use nextshop_core::domain::{CartItem, ListDraft, Product, Quantity, WishlistItem};
use nextshop_core::events::StoreEvent;
use nextshop_core::ports::{Identity, IdentityProvider, KeyValueStore};
use nextshop_core::storage::FileKv;
use nextshop_core::stores::{CartStore, WishlistStore};

/// Demo stand-in for the external identity provider: always signed in.
struct DemoAuth;

impl IdentityProvider for DemoAuth {
    fn current(&self) -> Option<Identity> {
        Some(Identity::new("demo", "demo@example.com"))
    }
}

fn cart_line(product: &Product, quantity: u32) -> CartItem {
    CartItem {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price.clone(),
        image: product.images.first().cloned().unwrap_or_default(),
        quantity: Quantity::new(quantity),
        color: product.colors.first().cloned(),
        size: product.sizes.first().cloned(),
    }
}

fn saved_item(product: &Product) -> WishlistItem {
    WishlistItem {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price.clone(),
        image: product.images.first().cloned().unwrap_or_default(),
        category: Some(product.category_id.clone()),
        added_at: chrono::Utc::now(),
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CoreConfig::from_env()?;
    let kv: Arc<dyn KeyValueStore> = Arc::new(FileKv::open(&config.data_path)?);
    let catalog = seed::seed();
    tracing::info!(products = catalog.products().len(), data = %config.data_path.display(), "NextShop core demo");

    // Browse: affordable in-stock products, cheapest first.
    let spec = FilterSpec {
        price_range: Some(PriceRange::new(Decimal::ZERO, Decimal::new(10000, 2))),
        in_stock: Some(true),
        sort_by: Some(SortKey::PriceAsc),
        ..Default::default()
    };
    for product in catalog.filtered(&spec) {
        tracing::info!(id = %product.id, name = %product.name, price = %product.price, "browse result");
    }

    // Cart: merge two adds of the same product, then price the order.
    let mut cart = CartStore::load(kv.clone())?;
    let hoodie = catalog.product_by_id("1").ok_or_else(|| anyhow::anyhow!("seed missing"))?;
    let mug = catalog.product_by_id("5").ok_or_else(|| anyhow::anyhow!("seed missing"))?;
    cart.add(cart_line(hoodie, 1))?;
    cart.add(cart_line(hoodie, 1))?;
    cart.add(cart_line(mug, 2))?;
    let totals = cart.totals(&config.pricing);
    tracing::info!(
        lines = cart.item_count(),
        subtotal = %totals.subtotal,
        shipping = %totals.shipping,
        tax = %totals.tax,
        total = %totals.total,
        "cart priced"
    );

    // Wishlist: attach the signed-in identity, save and organize items.
    let auth = DemoAuth;
    let identity = auth.current().ok_or_else(|| anyhow::anyhow!("signed out"))?;
    let mut wishlist = WishlistStore::new(kv);
    wishlist.attach(&identity)?;
    let jacket = catalog.product_by_id("3").ok_or_else(|| anyhow::anyhow!("seed missing"))?;
    wishlist.add_to_wishlist(saved_item(jacket), false)?;
    let gifts = wishlist.add_list(&ListDraft::new("Gift ideas"))?;
    wishlist.add_to_list(&gifts, saved_item(mug))?;
    tracing::info!(
        saved = wishlist.wishlist().len(),
        lists = wishlist.lists().len(),
        "wishlist updated"
    );

    cart.clear()?;

    // The merged event stream a UI layer would re-render from.
    let events: Vec<StoreEvent> = cart
        .take_events()
        .into_iter()
        .map(StoreEvent::Cart)
        .chain(wishlist.take_events().into_iter().map(StoreEvent::Wishlist))
        .collect();
    for event in events {
        tracing::info!(?event, "store event");
    }
    Ok(())
}
