// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side item storage: the view a menu uses to reach its items.
//!
//! Menus hold keys, never items; the scene graph owns item lifetime. Every
//! menu operation that needs to read or poke an item goes through an
//! [`ItemHost`] view the host passes in. [`ItemTable`] is a ready-made host
//! for the common case of a keyed table owned alongside the scene.

use core::hash::Hash;

use hashbrown::HashMap;

use veer_focus::FocusableItem;

/// Keyed access to host-owned focusable items.
///
/// A lookup that misses (a stale key the scene already tore down) is not an
/// error; menu operations skip such keys.
pub trait ItemHost<K> {
    /// Look up an item for reading.
    fn item(&self, key: K) -> Option<&dyn FocusableItem>;

    /// Look up an item for mutation.
    fn item_mut(&mut self, key: K) -> Option<&mut dyn FocusableItem>;
}

/// A hash-map backed [`ItemHost`].
///
/// Stores items of a single concrete type; hosts with heterogeneous items can
/// use `Box<dyn FocusableItem>` as the value type.
#[derive(Clone, Debug)]
pub struct ItemTable<K, T> {
    items: HashMap<K, T>,
}

impl<K: Copy + Eq + Hash, T: FocusableItem> Default for ItemTable<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + Eq + Hash, T: FocusableItem> ItemTable<K, T> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Insert an item under a key, replacing any previous occupant.
    pub fn insert(&mut self, key: K, item: T) -> Option<T> {
        self.items.insert(key, item)
    }

    /// Remove and return the item under a key.
    pub fn remove(&mut self, key: K) -> Option<T> {
        self.items.remove(&key)
    }

    /// Borrow the item under a key.
    pub fn get(&self, key: K) -> Option<&T> {
        self.items.get(&key)
    }

    /// Mutably borrow the item under a key.
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.items.get_mut(&key)
    }

    /// Number of items in the table.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Copy + Eq + Hash, T: FocusableItem> ItemHost<K> for ItemTable<K, T> {
    fn item(&self, key: K) -> Option<&dyn FocusableItem> {
        self.items.get(&key).map(|item| item as &dyn FocusableItem)
    }

    fn item_mut(&mut self, key: K) -> Option<&mut dyn FocusableItem> {
        self.items
            .get_mut(&key)
            .map(|item| item as &mut dyn FocusableItem)
    }
}
