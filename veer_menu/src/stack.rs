// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu stack: which menu is live while scenes come and go.
//!
//! Each interactive scene or layer owns one [`FocusMenu`]; as scenes stack up
//! (a pause overlay over a game over a title screen), exactly one menu may
//! accept input. A [`MenuStack`] tracks the realized menus in order and keeps
//! the input-enabled flag on precisely the top entry, so scenes never manage
//! each other's enablement.
//!
//! The stack holds keys; menus are owned by their scenes and reached through
//! a [`MenuLookup`] view, the same arrangement menus use for their items.
//! Wire it to the scene lifecycle: realization pushes, teardown removes.
//!
//! ```
//! use veer_menu::menu::FocusMenu;
//! use veer_menu::stack::{MenuStack, MenuTable};
//!
//! let mut menus: MenuTable<u8, u32> = MenuTable::new();
//! menus.insert(1, FocusMenu::new());
//! menus.insert(2, FocusMenu::new());
//!
//! let mut stack = MenuStack::new();
//! stack.push(1, &mut menus);
//! stack.push(2, &mut menus);
//!
//! // Only the top menu accepts input.
//! assert!(!menus.get(1).unwrap().is_input_enabled());
//! assert!(menus.get(2).unwrap().is_input_enabled());
//!
//! // Popping re-enables the menu underneath.
//! assert_eq!(stack.pop(&mut menus), Some(2));
//! assert!(menus.get(1).unwrap().is_input_enabled());
//! ```

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::menu::FocusMenu;

/// Keyed access to host-owned menus.
///
/// Mirrors [`ItemHost`](crate::host::ItemHost) one level up: the stack holds
/// menu keys, scenes own the menus. A missing key is skipped, not an error —
/// a scene may tear its menu down before deregistering it.
pub trait MenuLookup<M: Copy + Eq> {
    /// Key type of the items inside each menu.
    type ItemKey: Copy + Eq;

    /// Look up a menu for mutation.
    fn menu_mut(&mut self, key: M) -> Option<&mut FocusMenu<Self::ItemKey>>;
}

/// A hash-map backed [`MenuLookup`].
#[derive(Clone, Debug)]
pub struct MenuTable<M, K: Copy + Eq> {
    menus: HashMap<M, FocusMenu<K>>,
}

impl<M: Copy + Eq + Hash, K: Copy + Eq> Default for MenuTable<M, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Copy + Eq + Hash, K: Copy + Eq> MenuTable<M, K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            menus: HashMap::new(),
        }
    }

    /// Insert a menu under a key, replacing any previous occupant.
    pub fn insert(&mut self, key: M, menu: FocusMenu<K>) -> Option<FocusMenu<K>> {
        self.menus.insert(key, menu)
    }

    /// Remove and return the menu under a key.
    pub fn remove(&mut self, key: M) -> Option<FocusMenu<K>> {
        self.menus.remove(&key)
    }

    /// Borrow the menu under a key.
    pub fn get(&self, key: M) -> Option<&FocusMenu<K>> {
        self.menus.get(&key)
    }

    /// Mutably borrow the menu under a key.
    pub fn get_mut(&mut self, key: M) -> Option<&mut FocusMenu<K>> {
        self.menus.get_mut(&key)
    }

    /// Number of menus in the table.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}

impl<M: Copy + Eq + Hash, K: Copy + Eq> MenuLookup<M> for MenuTable<M, K> {
    type ItemKey = K;

    fn menu_mut(&mut self, key: M) -> Option<&mut FocusMenu<K>> {
        self.menus.get_mut(&key)
    }
}

/// Ordered stack of realized menus with exactly one live top.
///
/// An explicit instance, not a global: hosts keep one per process (or one per
/// isolated test) and pass it to scene lifecycle hooks. The stack enforces
/// that at most one of its members is input-enabled, and that it is the top
/// whenever the stack is non-empty.
#[derive(Clone, Debug)]
pub struct MenuStack<M: Copy + Eq> {
    entries: Vec<M>,
}

impl<M: Copy + Eq> Default for MenuStack<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Copy + Eq> MenuStack<M> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Push a realized menu: the previous top loses input, the new top gains
    /// it.
    ///
    /// Pushing a key already in the stack moves it to the top.
    pub fn push<L>(&mut self, key: M, menus: &mut L)
    where
        L: MenuLookup<M> + ?Sized,
    {
        self.entries.retain(|&k| k != key);
        if let Some(&top) = self.entries.last() {
            if let Some(menu) = menus.menu_mut(top) {
                menu.set_input_enabled(false);
            }
        }
        self.entries.push(key);
        if let Some(menu) = menus.menu_mut(key) {
            menu.set_input_enabled(true);
        }
    }

    /// Pop the top menu, disabling it and re-enabling the menu underneath.
    ///
    /// An empty stack is a benign no-op returning `None`.
    pub fn pop<L>(&mut self, menus: &mut L) -> Option<M>
    where
        L: MenuLookup<M> + ?Sized,
    {
        let key = self.entries.pop()?;
        if let Some(menu) = menus.menu_mut(key) {
            menu.set_input_enabled(false);
        }
        if let Some(&top) = self.entries.last() {
            if let Some(menu) = menus.menu_mut(top) {
                menu.set_input_enabled(true);
            }
        }
        Some(key)
    }

    /// Deregister a menu on teardown, wherever it sits.
    ///
    /// The documented contract is strict LIFO — a menu tears down while it is
    /// the top, and then this is exactly [`pop`](Self::pop). Scene teardown
    /// order is owned by the host, though, so a non-top entry is also honored:
    /// it is removed from the middle and disabled without disturbing the live
    /// top, which would otherwise leak an enabled-but-orphaned menu. Returns
    /// whether the key was present.
    pub fn remove<L>(&mut self, key: M, menus: &mut L) -> bool
    where
        L: MenuLookup<M> + ?Sized,
    {
        if self.entries.last() == Some(&key) {
            return self.pop(menus).is_some();
        }
        let Some(pos) = self.entries.iter().position(|&k| k == key) else {
            return false;
        };
        self.entries.remove(pos);
        if let Some(menu) = menus.menu_mut(key) {
            menu.set_input_enabled(false);
        }
        true
    }

    /// The live menu, if any.
    pub fn top(&self) -> Option<M> {
        self.entries.last().copied()
    }

    /// Whether `key` is the live top.
    pub fn is_top(&self, key: M) -> bool {
        self.top() == Some(key)
    }

    /// Number of stacked menus.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
