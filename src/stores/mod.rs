//! Client-persisted collection stores

pub mod cart;
pub mod wishlist;

pub use cart::CartStore;
pub use wishlist::{SaveOutcome, WishlistStore, DEFAULT_LIST_ID, DEFAULT_LIST_NAME};
