//! NextShop Storefront Core
//!
//! The filtering, sorting, and client-persisted collection engine behind a
//! storefront: product catalog queries, cart, wishlist, and named lists.
//!
//! ## Features
//! - Pure filter/sort pipeline over an in-memory catalog
//! - Quantity-tracked cart with derived checkout totals
//! - Wishlist plus user-defined named lists, scoped per identity
//! - Persistence through an injected key-value port, never ambient state

pub mod catalog;
pub mod config;
pub mod domain;
pub mod events;
pub mod ports;
pub mod storage;
pub mod stores;

use thiserror::Error;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum CoreError {
    /// An identity-scoped mutation was attempted while signed out.
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Invalid list name: {0:?}")]
    InvalidListName(String),

    #[error("Storage error: {0}")]
    Storage(#[from] ports::StorageError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
