//! Port definitions for external collaborators
//!
//! The core never talks to a concrete storage or identity implementation;
//! it is handed these traits at construction time.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::storage::keys::StorageKey;

/// Errors that can occur against the key-value collaborator.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Port for the persistent key-value collaborator.
///
/// String-keyed, string-valued, synchronous. Implementations stand in for
/// the browser-local store of the original system: an in-memory map for
/// tests, a JSON file for the demo binary.
pub trait KeyValueStore: Send + Sync {
    /// Fetch the blob stored under `key`, if any.
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StorageError>;

    /// Drop the blob stored under `key`. Absent keys are not an error.
    fn remove(&self, key: &StorageKey) -> Result<(), StorageError>;
}

/// Opaque identity identifier used to scope storage keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityId(String);

impl IdentityId {
    pub fn new(uid: impl Into<String>) -> Self {
        Self(uid.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The signed-in identity, as supplied by the external identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub uid: IdentityId,
    pub email: String,
}

impl Identity {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self { uid: IdentityId::new(uid), email: email.into() }
    }
}

/// Port for the external identity provider.
///
/// The core only reads the current identity to scope storage keys; it never
/// performs authentication itself.
pub trait IdentityProvider: Send + Sync {
    /// The currently signed-in identity, or `None` when signed out.
    fn current(&self) -> Option<Identity>;
}
