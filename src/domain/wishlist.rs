//! Saved items and user-defined named lists

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::value_objects::Money;

/// A saved product reference. Unique by id within the main wishlist;
/// uniqueness is independent per named list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub category: Option<String>,
    /// Set at insertion; used for sort order.
    pub added_at: DateTime<Utc>,
}

/// A named, ordered collection of saved items.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserList {
    pub id: String,
    pub name: String,
    pub items: Vec<WishlistItem>,
    pub created_at: DateTime<Utc>,
}

impl UserList {
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.id == product_id)
    }
}

/// User-supplied input for creating a list. The only path by which free
/// text enters the wishlist store.
#[derive(Clone, Debug, Validate)]
pub struct ListDraft {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
}

impl ListDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into().trim().to_string() }
    }
}
