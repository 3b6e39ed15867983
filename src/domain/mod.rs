//! Domain types for the storefront core

pub mod cart;
pub mod product;
pub mod value_objects;
pub mod wishlist;

pub use cart::{CartItem, CartTotals, Pricing};
pub use product::Product;
pub use value_objects::{Money, MoneyError, Quantity};
pub use wishlist::{ListDraft, UserList, WishlistItem};
