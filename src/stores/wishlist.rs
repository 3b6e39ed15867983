//! Wishlist and named-lists store
//!
//! The main wishlist plus zero or more user-defined named lists, scoped to
//! the attached identity and persisted under identity-scoped keys. An item
//! cannot live in any named list without also living in the main wishlist;
//! single-item removal cascades to every list. Bulk clear intentionally
//! does not (lists keep their entries after `clear_wishlist`).

use std::sync::Arc;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{ListDraft, UserList, WishlistItem};
use crate::events::WishlistEvent;
use crate::ports::{Identity, IdentityId, KeyValueStore, StorageError};
use crate::storage::keys::{StorageKey, StoreName};
use crate::{CoreError, Result};

/// The auto-created list every identity starts with. Its id is fixed so
/// mirroring keeps working after a rename.
pub const DEFAULT_LIST_ID: &str = "favorites";
pub const DEFAULT_LIST_NAME: &str = "Favorites";

/// What happened on a save attempt. `AlreadySaved` is a user-facing notice,
/// not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

pub struct WishlistStore {
    kv: Arc<dyn KeyValueStore>,
    identity: Option<IdentityId>,
    wishlist: Vec<WishlistItem>,
    lists: Vec<UserList>,
    events: Vec<WishlistEvent>,
}

impl WishlistStore {
    /// A detached store: no identity, nothing loaded.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv, identity: None, wishlist: Vec::new(), lists: Vec::new(), events: Vec::new() }
    }

    pub fn is_attached(&self) -> bool {
        self.identity.is_some()
    }

    pub fn wishlist(&self) -> &[WishlistItem] {
        &self.wishlist
    }

    pub fn lists(&self) -> &[UserList] {
        &self.lists
    }

    /// Every list currently containing the given product.
    pub fn item_lists(&self, product_id: &str) -> Vec<&UserList> {
        self.lists.iter().filter(|l| l.contains(product_id)).collect()
    }

    /// Drain the events raised since the last call.
    pub fn take_events(&mut self) -> Vec<WishlistEvent> {
        std::mem::take(&mut self.events)
    }

    /// Attach a signed-in identity: load its persisted wishlist and lists,
    /// creating the default list on first sight of this identity.
    pub fn attach(&mut self, identity: &Identity) -> Result<()> {
        let uid = identity.uid.clone();
        let wishlist = self.load_collection(StorageKey::scoped(StoreName::Wishlist, &uid))?;
        let lists = self.load_collection(StorageKey::scoped(StoreName::Lists, &uid))?;
        self.wishlist = wishlist;
        self.lists = lists;
        self.identity = Some(uid);
        if self.lists.is_empty() {
            self.lists.push(UserList {
                id: DEFAULT_LIST_ID.to_string(),
                name: DEFAULT_LIST_NAME.to_string(),
                items: Vec::new(),
                created_at: Utc::now(),
            });
            self.persist_lists()?;
            debug!(uid = %identity.uid, "created default list for new identity");
        }
        Ok(())
    }

    /// Drop the in-memory state on sign-out. Persisted copies remain under
    /// the now-inactive identity's keys.
    pub fn detach(&mut self) {
        self.identity = None;
        self.wishlist.clear();
        self.lists.clear();
        self.events.clear();
    }

    /// Save an item to the main wishlist. Unless `skip_default_list` is
    /// set, the item is mirrored into the default list when that list does
    /// not already contain it.
    pub fn add_to_wishlist(
        &mut self,
        mut item: WishlistItem,
        skip_default_list: bool,
    ) -> Result<SaveOutcome> {
        self.require_identity()?;
        if self.wishlist.iter().any(|i| i.id == item.id) {
            self.events.push(WishlistEvent::AlreadySaved { product_id: item.id });
            return Ok(SaveOutcome::AlreadySaved);
        }
        item.added_at = Utc::now();
        debug!(product_id = %item.id, skip_default_list, "saved item to wishlist");
        self.events.push(WishlistEvent::Saved { product_id: item.id.clone() });
        self.wishlist.push(item.clone());
        self.persist_wishlist()?;

        if !skip_default_list {
            if let Some(list) = self.lists.iter_mut().find(|l| l.id == DEFAULT_LIST_ID) {
                if !list.contains(&item.id) {
                    list.items.push(item.clone());
                    self.events.push(WishlistEvent::AddedToList {
                        list_id: DEFAULT_LIST_ID.to_string(),
                        product_id: item.id,
                    });
                    self.persist_lists()?;
                }
            }
        }
        Ok(SaveOutcome::Saved)
    }

    /// Remove an item from the main wishlist and cascade the removal to
    /// every named list. Absent ids are a no-op.
    pub fn remove_from_wishlist(&mut self, product_id: &str) -> Result<()> {
        self.require_identity()?;
        let before = self.wishlist.len();
        self.wishlist.retain(|i| i.id != product_id);
        let removed_from_wishlist = self.wishlist.len() != before;
        if removed_from_wishlist {
            self.events.push(WishlistEvent::Removed { product_id: product_id.to_string() });
            self.persist_wishlist()?;
        }

        let mut lists_touched = false;
        for list in &mut self.lists {
            let before = list.items.len();
            list.items.retain(|i| i.id != product_id);
            if list.items.len() != before {
                lists_touched = true;
                self.events.push(WishlistEvent::RemovedFromList {
                    list_id: list.id.clone(),
                    product_id: product_id.to_string(),
                });
            }
        }
        if lists_touched {
            self.persist_lists()?;
        }
        if removed_from_wishlist || lists_touched {
            debug!(product_id, "removed item from wishlist and lists");
        }
        Ok(())
    }

    /// Insert an item into a named list. An item not yet in the main
    /// wishlist is force-added there first, bypassing default-list
    /// mirroring so it does not land in two lists at once. Inserting into
    /// a list that already holds the item is idempotent; unknown list ids
    /// skip the list insert (the back-fill still happens).
    pub fn add_to_list(&mut self, list_id: &str, item: WishlistItem) -> Result<()> {
        self.require_identity()?;
        if !self.wishlist.iter().any(|i| i.id == item.id) {
            self.add_to_wishlist(item.clone(), true)?;
        }
        let Some(list) = self.lists.iter_mut().find(|l| l.id == list_id) else {
            warn!(list_id, "add_to_list on unknown list");
            return Ok(());
        };
        if list.contains(&item.id) {
            return Ok(());
        }
        list.items.push(item.clone());
        self.events.push(WishlistEvent::AddedToList {
            list_id: list_id.to_string(),
            product_id: item.id,
        });
        self.persist_lists()
    }

    /// Remove an item from one list only; the main wishlist and the other
    /// lists are untouched.
    pub fn remove_from_list(&mut self, list_id: &str, product_id: &str) -> Result<()> {
        self.require_identity()?;
        let Some(list) = self.lists.iter_mut().find(|l| l.id == list_id) else {
            return Ok(());
        };
        let before = list.items.len();
        list.items.retain(|i| i.id != product_id);
        if list.items.len() == before {
            return Ok(());
        }
        self.events.push(WishlistEvent::RemovedFromList {
            list_id: list_id.to_string(),
            product_id: product_id.to_string(),
        });
        self.persist_lists()
    }

    /// Create a new empty named list. Requires a signed-in identity and a
    /// valid name.
    pub fn add_list(&mut self, draft: &ListDraft) -> Result<String> {
        draft.validate().map_err(|_| CoreError::InvalidListName(draft.name.clone()))?;
        self.require_identity()?;
        let list = UserList {
            id: Uuid::new_v4().to_string(),
            name: draft.name.clone(),
            items: Vec::new(),
            created_at: Utc::now(),
        };
        let id = list.id.clone();
        debug!(list_id = %id, name = %list.name, "created list");
        self.events.push(WishlistEvent::ListCreated { list_id: id.clone(), name: list.name.clone() });
        self.lists.push(list);
        self.persist_lists()?;
        Ok(id)
    }

    /// Rename a list. Unknown ids are a no-op.
    pub fn rename_list(&mut self, list_id: &str, draft: &ListDraft) -> Result<()> {
        draft.validate().map_err(|_| CoreError::InvalidListName(draft.name.clone()))?;
        self.require_identity()?;
        let Some(list) = self.lists.iter_mut().find(|l| l.id == list_id) else {
            return Ok(());
        };
        list.name = draft.name.clone();
        self.events.push(WishlistEvent::ListRenamed {
            list_id: list_id.to_string(),
            name: draft.name.clone(),
        });
        self.persist_lists()
    }

    /// Delete a list. Unknown ids are a no-op.
    pub fn delete_list(&mut self, list_id: &str) -> Result<()> {
        self.require_identity()?;
        let before = self.lists.len();
        self.lists.retain(|l| l.id != list_id);
        if self.lists.len() == before {
            return Ok(());
        }
        self.events.push(WishlistEvent::ListDeleted { list_id: list_id.to_string() });
        self.persist_lists()
    }

    /// Empty the main wishlist. Named lists are intentionally untouched, so
    /// a list may keep referencing items no longer in the wishlist.
    pub fn clear_wishlist(&mut self) -> Result<()> {
        self.require_identity()?;
        self.wishlist.clear();
        self.events.push(WishlistEvent::Cleared);
        self.persist_wishlist()
    }

    fn require_identity(&self) -> Result<&IdentityId> {
        self.identity.as_ref().ok_or(CoreError::NotSignedIn)
    }

    fn load_collection<T: DeserializeOwned>(&self, key: StorageKey) -> Result<Vec<T>> {
        match self.kv.get(&key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(items),
                Err(e) => {
                    warn!(%key, error = %e, "discarding corrupt snapshot");
                    Ok(Vec::new())
                }
            },
            None => Ok(Vec::new()),
        }
    }

    fn persist_wishlist(&self) -> Result<()> {
        let uid = self.require_identity()?;
        let raw = serde_json::to_string(&self.wishlist).map_err(StorageError::from)?;
        self.kv.set(&StorageKey::scoped(StoreName::Wishlist, uid), &raw)?;
        Ok(())
    }

    fn persist_lists(&self) -> Result<()> {
        let uid = self.require_identity()?;
        let raw = serde_json::to_string(&self.lists).map_err(StorageError::from)?;
        self.kv.set(&StorageKey::scoped(StoreName::Lists, uid), &raw)?;
        Ok(())
    }
}
