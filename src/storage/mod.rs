//! Storage key builder and key-value adapters

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileKv;
pub use keys::{StorageKey, StoreName};
pub use memory::MemoryKv;
