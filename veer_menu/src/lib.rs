// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Veer Menu: focus-managed menus for remote-control UIs.
//!
//! ## Overview
//!
//! A remote has no cursor: the user pans in a direction and clicks. This
//! crate supplies the two pieces a scene-graph host wires that input into:
//!
//! - [`menu::FocusMenu`] — one scene's interactive surface. It composes the
//!   pan session machine (`veer_gesture`) with angular selection
//!   (`veer_focus`) over a set of host-owned items, and routes the remote's
//!   click, menu/back, and play/pause buttons.
//! - [`stack::MenuStack`] — process-wide arbitration. As scenes push and pop,
//!   exactly one menu keeps accepting input; everything underneath is muted
//!   until it surfaces again.
//!
//! The host owns everything with a lifetime: items live in an
//! [`host::ItemHost`] (for example [`host::ItemTable`]), menus in a
//! [`stack::MenuLookup`] (for example [`stack::MenuTable`]). Menus and the
//! stack hold only copyable keys, so scene teardown never races a dangling
//! reference — a stale key is skipped.
//!
//! ## Workflow
//!
//! 1. A scene builds its items, a `FocusMenu` over their keys, and designates
//!    a back item for the hardware menu button.
//! 2. On realization the scene pushes the menu onto the shared stack; on
//!    teardown it removes it. The stack keeps the input-enabled flag on the
//!    top menu only.
//! 3. The platform gesture recognizer feeds `handle_pan`; the button source
//!    feeds `handle_button`. Everything else is callbacks on the items.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use veer_focus::{FocusableItem, ItemState};
//! use veer_gesture::pan::PanPhase;
//! use veer_menu::host::ItemTable;
//! use veer_menu::menu::{ButtonEvent, FocusMenu};
//!
//! struct Button {
//!     state: ItemState,
//!     pressed: u32,
//! }
//!
//! impl Button {
//!     fn at(x: f64, y: f64) -> Self {
//!         Self {
//!             state: ItemState::new(Point::new(x, y)),
//!             pressed: 0,
//!         }
//!     }
//! }
//!
//! impl FocusableItem for Button {
//!     fn is_enabled(&self) -> bool {
//!         self.state.is_enabled()
//!     }
//!     fn is_focused(&self) -> bool {
//!         self.state.is_focused()
//!     }
//!     fn set_focused(&mut self, focused: bool) {
//!         self.state.set_focused(focused);
//!     }
//!     fn activate(&mut self) {
//!         self.pressed += 1;
//!     }
//!     fn position(&self) -> Point {
//!         self.state.position
//!     }
//! }
//!
//! let mut items = ItemTable::new();
//! items.insert(1_u32, Button::at(0.0, 0.0));
//! items.insert(2, Button::at(120.0, 0.0));
//!
//! let mut menu = FocusMenu::new();
//! menu.add_item(1);
//! menu.add_item(2);
//!
//! // Focus starts on the first enabled child.
//! menu.find_first_focusable(&mut items);
//! assert_eq!(menu.focused_item(), Some(1));
//!
//! // An eastward pan past the commit distance moves focus east.
//! menu.handle_pan(PanPhase::Begin, Vec2::ZERO, &mut items);
//! menu.handle_pan(PanPhase::Change, Vec2::new(40.0, 0.0), &mut items);
//! menu.handle_pan(PanPhase::End, Vec2::ZERO, &mut items);
//! assert_eq!(menu.focused_item(), Some(2));
//!
//! // A click activates whatever has focus.
//! menu.handle_button(ButtonEvent::Click, &mut items);
//! assert_eq!(items.get(2).unwrap().pressed, 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod host;
pub mod menu;
pub mod stack;
