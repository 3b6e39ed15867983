//! Store events
//!
//! Raised by the collection stores on every mutation and drained with
//! `take_events()`, so the UI layer can re-render and surface notices.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    Cart(CartEvent),
    Wishlist(WishlistEvent),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded { product_id: String },
    QuantityChanged { product_id: String, quantity: u32 },
    ItemRemoved { product_id: String },
    Cleared,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WishlistEvent {
    Saved { product_id: String },
    /// The item was already saved; a user-facing notice, not an error.
    AlreadySaved { product_id: String },
    Removed { product_id: String },
    AddedToList { list_id: String, product_id: String },
    RemovedFromList { list_id: String, product_id: String },
    ListCreated { list_id: String, name: String },
    ListRenamed { list_id: String, name: String },
    ListDeleted { list_id: String },
    Cleared,
}
