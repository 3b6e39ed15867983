//! Cart store
//!
//! A quantity-tracked set of line items keyed by product id, persisted as a
//! whole snapshot under the process-wide cart key on every mutation. The
//! in-memory collection is the source of truth; the persisted copy is a
//! mirror read once at load time.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{CartItem, CartTotals, Pricing, Quantity};
use crate::events::CartEvent;
use crate::ports::{KeyValueStore, StorageError};
use crate::storage::keys::{StorageKey, StoreName};
use crate::Result;

pub struct CartStore {
    kv: Arc<dyn KeyValueStore>,
    key: StorageKey,
    items: Vec<CartItem>,
    events: Vec<CartEvent>,
}

impl CartStore {
    /// Load the persisted cart, or start empty. A corrupt snapshot degrades
    /// to an empty cart with a warning; an unreachable store is an error.
    pub fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self> {
        let key = StorageKey::global(StoreName::Cart);
        let items = match kv.get(&key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!(%key, error = %e, "discarding corrupt cart snapshot");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        Ok(Self { kv, key, items, events: Vec::new() })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn totals(&self, pricing: &Pricing) -> CartTotals {
        CartTotals::compute(&self.items, pricing)
    }

    /// Add a line item. An existing line with the same product id absorbs
    /// the incoming quantity instead of duplicating.
    pub fn add(&mut self, item: CartItem) -> Result<()> {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.add(item.quantity.value());
                let quantity = existing.quantity.value();
                debug!(product_id = %item.id, quantity, "merged cart line");
                self.events.push(CartEvent::QuantityChanged { product_id: item.id, quantity });
            }
            None => {
                debug!(product_id = %item.id, "added cart line");
                self.events.push(CartEvent::ItemAdded { product_id: item.id.clone() });
                self.items.push(item);
            }
        }
        self.persist()
    }

    /// Remove a line. Absent ids are a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Ok(());
        }
        debug!(product_id = %id, "removed cart line");
        self.events.push(CartEvent::ItemRemoved { product_id: id.to_string() });
        self.persist()
    }

    /// Replace a line's quantity. Zero removes the line; absent ids are a
    /// no-op.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return self.remove(id);
        }
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return Ok(());
        };
        item.quantity = Quantity::new(quantity);
        debug!(product_id = %id, quantity, "updated cart quantity");
        self.events.push(CartEvent::QuantityChanged { product_id: id.to_string(), quantity });
        self.persist()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.events.push(CartEvent::Cleared);
        self.persist()
    }

    /// Drain the events raised since the last call.
    pub fn take_events(&mut self) -> Vec<CartEvent> {
        std::mem::take(&mut self.events)
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.items).map_err(StorageError::from)?;
        self.kv.set(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, Quantity};
    use crate::storage::MemoryKv;
    use crate::CoreError;
    use rust_decimal::Decimal;

    fn item(id: &str, price: i64, qty: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: format!("Product {id}"),
            price: Money::usd(Decimal::new(price, 0)),
            image: format!("/img/{id}.jpg"),
            quantity: Quantity::new(qty),
            color: None,
            size: None,
        }
    }

    fn store() -> CartStore {
        CartStore::load(Arc::new(MemoryKv::new())).unwrap()
    }

    #[test]
    fn test_add_merges_quantity_per_product_id() {
        let mut cart = store();
        cart.add(item("1", 10, 2)).unwrap();
        cart.add(item("1", 10, 3)).unwrap();
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.items()[0].quantity.value(), 5);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = store();
        cart.add(item("1", 10, 1)).unwrap();
        cart.remove("nope").unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let mut cart = store();
        cart.add(item("1", 10, 2)).unwrap();
        cart.update_quantity("1", 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = store();
        cart.add(item("1", 10, 2)).unwrap();
        cart.update_quantity("1", 7).unwrap();
        assert_eq!(cart.items()[0].quantity.value(), 7);
        // Unknown id leaves the cart untouched.
        cart.update_quantity("2", 4).unwrap();
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let kv = Arc::new(MemoryKv::new());
        {
            let mut cart = CartStore::load(kv.clone()).unwrap();
            cart.add(item("1", 10, 2)).unwrap();
            cart.add(item("2", 5, 1)).unwrap();
        }
        let reloaded = CartStore::load(kv).unwrap();
        assert_eq!(reloaded.item_count(), 2);
        assert_eq!(reloaded.items()[0].id, "1");
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_empty() {
        let kv = Arc::new(MemoryKv::new());
        kv.set(&StorageKey::global(StoreName::Cart), "not json").unwrap();
        let cart = CartStore::load(kv).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_persistence_failure_is_surfaced() {
        struct FailingKv;
        impl KeyValueStore for FailingKv {
            fn get(&self, _: &StorageKey) -> std::result::Result<Option<String>, StorageError> {
                Ok(None)
            }
            fn set(&self, _: &StorageKey, _: &str) -> std::result::Result<(), StorageError> {
                Err(StorageError::Unavailable("quota exceeded".into()))
            }
            fn remove(&self, _: &StorageKey) -> std::result::Result<(), StorageError> {
                Ok(())
            }
        }

        let mut cart = CartStore::load(Arc::new(FailingKv)).unwrap();
        let err = cart.add(item("1", 10, 1)).unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
    }

    #[test]
    fn test_events_are_drained() {
        let mut cart = store();
        cart.add(item("1", 10, 1)).unwrap();
        cart.clear().unwrap();
        let events = cart.take_events();
        assert_eq!(
            events,
            vec![CartEvent::ItemAdded { product_id: "1".into() }, CartEvent::Cleared]
        );
        assert!(cart.take_events().is_empty());
    }

    #[test]
    fn test_totals_reflect_lines() {
        let mut cart = store();
        cart.add(item("1", 100, 2)).unwrap();
        let totals = cart.totals(&Pricing::default());
        assert_eq!(totals.subtotal.amount(), Decimal::new(200, 0));
        assert_eq!(totals.total.amount(), Decimal::new(226, 0));
    }
}
