// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus menu: pan-driven focus movement and button routing over one set of
//! items.
//!
//! ## Overview
//!
//! A [`FocusMenu`] composes the pan session machine from `veer_gesture` with
//! the angular selection policy from `veer_focus` over a set of host-owned
//! children. It holds keys and focus state only; items are reached through an
//! [`ItemHost`](crate::host::ItemHost) view per call.
//!
//! ## Input routing
//!
//! - Pan samples feed the tracker. A commit either moves focus (pan control
//!   active) or is absorbed by the focused item as a touch angle (pan control
//!   inactive), possibly handing the item the whole stream.
//! - `Click` activates the focused item. `Menu` activates the designated back
//!   item, which is hidden from all focus traversal. `PlayPause` is
//!   configurable via [`PlayPauseAction`].
//! - Everything is swallowed while the menu is not input-enabled (the menu
//!   stack enables exactly the top menu).
//!
//! Degraded inputs — no children, no focused item, a key the host no longer
//! knows — are defined no-ops throughout; there is nothing to report and
//! nobody to report it to mid-gesture.

use alloc::vec::Vec;

use kurbo::Vec2;
use smallvec::SmallVec;

use veer_focus::{AngularPolicy, Candidate, first_enabled, next_enabled};
use veer_gesture::pan::{PanEvent, PanPhase, PanState, PanTracker};

use crate::host::ItemHost;

/// Discrete remote-button events a menu routes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonEvent {
    /// Touchpad click: activate the focused item.
    Click,
    /// Hardware menu/back button: activate the designated back item.
    Menu,
    /// Play/pause button: behavior per [`PlayPauseAction`].
    PlayPause,
}

/// What the play/pause button does for a given menu.
///
/// Games that drive a character with their own pan handling use
/// [`TogglesPanControl`](Self::TogglesPanControl) to flip between gameplay
/// and menu navigation; games that need live action and buttons at once use
/// [`ShiftsFocus`](Self::ShiftsFocus) so focus moves without panning at all.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayPauseAction {
    /// The play/pause button is ignored.
    #[default]
    None,
    /// Flip [`FocusMenu::pan_control_active`] on each press.
    TogglesPanControl,
    /// Step focus to the next enabled item on each press.
    ShiftsFocus,
}

/// Number of candidate entries kept inline in the per-event snapshot.
const CANDIDATE_INLINE: usize = 8;

/// A focus-managed menu over host-owned items.
///
/// Children are tracked by key in insertion order; that order is the
/// deterministic tie-break for selection and the traversal order for
/// [`find_first_focusable`](Self::find_first_focusable) and
/// [`find_next_focusable`](Self::find_next_focusable). At most one child is
/// focused at any time; all focus changes funnel through one internal path
/// that clears the old focus before setting the new.
#[derive(Clone, Debug)]
pub struct FocusMenu<K: Copy + Eq> {
    children: Vec<K>,
    focused: Option<K>,
    back: Option<K>,
    play_pause_action: PlayPauseAction,
    pan_control_active: bool,
    input_enabled: bool,
    policy: AngularPolicy,
    tracker: PanTracker,
}

impl<K: Copy + Eq> FocusMenu<K> {
    /// Create an empty menu with default commit distance and tolerance.
    ///
    /// New menus accept input; once pushed onto a
    /// [`MenuStack`](crate::stack::MenuStack) the stack owns the flag and
    /// enables exactly the top menu.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            focused: None,
            back: None,
            play_pause_action: PlayPauseAction::default(),
            pan_control_active: true,
            input_enabled: true,
            policy: AngularPolicy::default(),
            tracker: PanTracker::new(),
        }
    }

    /// Create a menu whose pans commit after a custom distance, in host
    /// coordinate units.
    pub fn with_commit_distance(commit_distance: f64) -> Self {
        Self {
            tracker: PanTracker::with_commit_distance(commit_distance),
            ..Self::new()
        }
    }

    /// Append a child. A key already present is not added twice.
    pub fn add_item(&mut self, key: K) {
        if !self.children.contains(&key) {
            self.children.push(key);
        }
    }

    /// Remove a child. Removing the focused child clears focus; removing the
    /// back child clears the back designation.
    pub fn remove_item(&mut self, key: K) {
        self.children.retain(|&k| k != key);
        if self.focused == Some(key) {
            self.focused = None;
        }
        if self.back == Some(key) {
            self.back = None;
        }
    }

    /// Child keys in insertion order.
    pub fn children(&self) -> &[K] {
        &self.children
    }

    /// Designate the back item, or clear the designation with `None`.
    ///
    /// The back item is activated by the hardware menu button and never
    /// appears in focus traversal. Designate it before focus can land on it.
    pub fn set_back_item(&mut self, key: Option<K>) {
        self.back = key;
    }

    /// The designated back item, if any.
    pub fn back_item(&self) -> Option<K> {
        self.back
    }

    /// The currently focused child, if any.
    pub fn focused_item(&self) -> Option<K> {
        self.focused
    }

    /// How the play/pause button is routed.
    pub fn play_pause_action(&self) -> PlayPauseAction {
        self.play_pause_action
    }

    /// Configure the play/pause button.
    pub fn set_play_pause_action(&mut self, action: PlayPauseAction) {
        self.play_pause_action = action;
    }

    /// Whether pan commits move focus (`true`) or are absorbed by the focused
    /// item (`false`).
    pub fn pan_control_active(&self) -> bool {
        self.pan_control_active
    }

    /// Set who pan commits belong to; see
    /// [`pan_control_active`](Self::pan_control_active).
    pub fn set_pan_control_active(&mut self, active: bool) {
        self.pan_control_active = active;
    }

    /// Whether this menu currently accepts input.
    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    /// Enable or disable input delivery. Owned by the menu stack once the
    /// menu participates in one.
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    /// Qualifying half-angle for directional selection, in degrees.
    pub fn angular_tolerance_deg(&self) -> f64 {
        self.policy.tolerance_deg
    }

    /// Adjust the qualifying half-angle for directional selection.
    pub fn set_angular_tolerance_deg(&mut self, tolerance_deg: f64) {
        self.policy.tolerance_deg = tolerance_deg;
    }

    /// Current pan session state, for hosts that need to coordinate with an
    /// in-flight gesture.
    pub fn pan_state(&self) -> PanState {
        self.tracker.state()
    }

    /// Focus the first enabled, non-back child in insertion order.
    ///
    /// Also re-arms pan-driven focus movement
    /// ([`pan_control_active`](Self::pan_control_active) becomes `true`),
    /// which is what a scene wants when it seeds or restores focus. Landing
    /// on the already-focused child restarts its focus presentation via
    /// `reset_focus` instead of toggling it.
    ///
    /// Returns the newly focused key, or `None` when nothing is focusable.
    pub fn find_first_focusable(&mut self, items: &mut dyn ItemHost<K>) -> Option<K> {
        self.pan_control_active = true;
        let candidates = self.candidates(items);
        let first = first_enabled(&candidates)?;
        self.focus_on(items, first);
        Some(first)
    }

    /// Focus the next enabled, non-back child strictly after the current
    /// focus in insertion order, wrapping past the end.
    ///
    /// The current child itself never qualifies. Returns the newly focused
    /// key, or `None` when nothing else is focusable.
    pub fn find_next_focusable(&mut self, items: &mut dyn ItemHost<K>) -> Option<K> {
        let candidates = self.candidates(items);
        let next = next_enabled(self.focused, &candidates)?;
        self.focus_on(items, next);
        Some(next)
    }

    /// Feed one platform pan sample.
    ///
    /// Deltas are in the host's coordinate space, y-up. Swallowed while the
    /// menu is not input-enabled.
    pub fn handle_pan(&mut self, phase: PanPhase, delta: Vec2, items: &mut dyn ItemHost<K>) {
        if !self.input_enabled {
            return;
        }
        let Some(event) = self.tracker.feed(phase, delta) else {
            return;
        };
        match event {
            PanEvent::Commit { angle_deg, first } => {
                if self.pan_control_active {
                    let candidates = self.candidates(items);
                    if let Some(next) = self.policy.select(self.focused, &candidates, angle_deg) {
                        self.focus_on(items, next);
                    }
                } else if let Some(key) = self.focused {
                    // Absorbed mode: the focused item consumes the direction,
                    // and may claim the rest of the stream.
                    let Some(item) = items.item_mut(key) else {
                        return;
                    };
                    if item.wants_angle_of_touch() {
                        item.set_angle_of_touch(angle_deg, first, false);
                        if item.wants_control_of_touch() {
                            self.tracker.set_captured(true);
                        }
                    }
                }
            }
            PanEvent::Sample { angle_deg, last } => {
                let Some(key) = self.focused else {
                    return;
                };
                let Some(item) = items.item_mut(key) else {
                    return;
                };
                item.set_angle_of_touch(angle_deg, false, last);
                if !last && !item.wants_control_of_touch() {
                    self.tracker.set_captured(false);
                }
            }
        }
    }

    /// Route one remote-button event.
    ///
    /// Swallowed while the menu is not input-enabled. A click while an item
    /// holds the pan stream is ignored; the menu button works in any state
    /// and is never delivered to the focused item.
    pub fn handle_button(&mut self, event: ButtonEvent, items: &mut dyn ItemHost<K>) {
        if !self.input_enabled {
            return;
        }
        match event {
            ButtonEvent::Click => {
                if self.tracker.is_captured() {
                    return;
                }
                let Some(key) = self.focused else {
                    return;
                };
                if let Some(item) = items.item_mut(key) {
                    if item.is_enabled() {
                        item.activate();
                    }
                }
            }
            ButtonEvent::Menu => {
                let Some(key) = self.back else {
                    return;
                };
                if let Some(item) = items.item_mut(key) {
                    if item.is_enabled() {
                        item.activate();
                    }
                }
            }
            ButtonEvent::PlayPause => match self.play_pause_action {
                PlayPauseAction::None => {}
                PlayPauseAction::TogglesPanControl => {
                    self.pan_control_active = !self.pan_control_active;
                }
                PlayPauseAction::ShiftsFocus => {
                    self.find_next_focusable(items);
                }
            },
        }
    }

    /// Snapshot the children as selection candidates.
    ///
    /// The back item and keys the host no longer knows are excluded; disabled
    /// items stay in the snapshot (selection and traversal filter on the
    /// flag) so insertion-order positions are stable.
    fn candidates(&self, items: &dyn ItemHost<K>) -> SmallVec<[Candidate<K>; CANDIDATE_INLINE]> {
        self.children
            .iter()
            .filter(|&&key| self.back != Some(key))
            .filter_map(|&key| {
                items.item(key).map(|item| Candidate {
                    id: key,
                    position: item.position(),
                    enabled: item.is_enabled(),
                })
            })
            .collect()
    }

    /// The single focus-change path: clears the old focus before setting the
    /// new, so no two children are ever focused at once. Re-focusing the
    /// current child restarts its presentation instead.
    fn focus_on(&mut self, items: &mut dyn ItemHost<K>, key: K) {
        if self.focused == Some(key) {
            if let Some(item) = items.item_mut(key) {
                item.reset_focus();
            }
            return;
        }
        if let Some(old) = self.focused.take() {
            if let Some(item) = items.item_mut(old) {
                item.set_focused(false);
            }
        }
        if let Some(item) = items.item_mut(key) {
            item.set_focused(true);
        }
        self.focused = Some(key);
    }
}

impl<K: Copy + Eq> Default for FocusMenu<K> {
    fn default() -> Self {
        Self::new()
    }
}
