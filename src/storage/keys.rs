//! Typed storage keys
//!
//! Every persisted snapshot lives under a key built here; call sites never
//! concatenate key strings themselves.

use std::fmt;

use crate::ports::IdentityId;

const KEY_PREFIX: &str = "nextshop";

/// The stores that persist snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreName {
    Cart,
    Wishlist,
    Lists,
}

impl StoreName {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreName::Cart => "cart",
            StoreName::Wishlist => "wishlist",
            StoreName::Lists => "lists",
        }
    }
}

/// A fully-built storage key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    /// Process-wide key, not scoped to any identity. The cart uses this.
    pub fn global(store: StoreName) -> Self {
        Self(format!("{KEY_PREFIX}.{}", store.as_str()))
    }

    /// Key scoped to a signed-in identity. Wishlist and lists use this.
    pub fn scoped(store: StoreName, identity: &IdentityId) -> Self {
        Self(format!("{KEY_PREFIX}.{}.{}", store.as_str(), identity))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
