// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Veer Focus: focusable-item capability and angular focus selection.
//!
//! Remote touchpads report pan gestures as directions, not positions: there is
//! no cursor, so "which item does the user mean?" must be answered from the
//! angle of the pan alone. This crate models that as a combination of:
//!
//! - A **per-item capability** ([`FocusableItem`]) that any interactive
//!   element can implement — enabled and focused state, activation, and an
//!   optional interest in raw touch angles.
//! - A **snapshot of candidates** ([`Candidate`]) describing where focusable
//!   elements live in the menu's 2D coordinate space. Slice order is the
//!   host's insertion order and doubles as the deterministic tie-break.
//! - An **angular selection policy** ([`AngularPolicy`]) that picks the
//!   closest enabled candidate within an angular tolerance of the pan
//!   direction.
//! - **Ordered traversal** helpers ([`first_enabled`], [`next_enabled`]) for
//!   hosts that step focus with a button instead of a pan.
//!
//! Angles are degrees with 0° at north (+y) increasing clockwise, matching a
//! y-up host coordinate space. [`pan_angle`] converts a translation vector to
//! this convention and [`angular_difference`] folds the modulo-360 difference
//! of two angles into `[0, 180]`.
//!
//! ## Minimal example
//!
//! A focused item at the origin with one neighbor due east:
//!
//! ```rust
//! use kurbo::Point;
//! use veer_focus::{AngularPolicy, Candidate};
//!
//! let items = vec![
//!     Candidate { id: 1_u32, position: Point::ZERO, enabled: true },
//!     Candidate { id: 2_u32, position: Point::new(40.0, 0.0), enabled: true },
//! ];
//! let policy = AngularPolicy::default();
//!
//! // A pan heading roughly east (92°) lands on the east neighbor…
//! assert_eq!(policy.select(Some(1), &items, 92.0), Some(2));
//! // …while a pan that matches nothing leaves focus alone.
//! assert_eq!(policy.select(Some(1), &items, 200.0), None);
//! ```
//!
//! The core types are generic over the item identifier `K`, so callers can use
//! any small, copyable handle. Items themselves are owned by the host scene
//! graph; this crate only ever sees keys, positions, and the capability trait.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;

use kurbo::{Point, Vec2};

/// Default angular tolerance, in degrees, for directional selection.
///
/// A candidate qualifies when its position-angle lies within this many degrees
/// of the pan direction (wraparound folded).
pub const ANGULAR_TOLERANCE_DEG: f64 = 25.0;

/// Capability contract for anything that can take focus in a menu.
///
/// This is deliberately a trait rather than a base type: list rows, buttons,
/// sliders, and non-widget objects can all participate as long as they answer
/// these questions. The owning menu upholds the invariant that at most one of
/// its children is focused at a time.
pub trait FocusableItem {
    /// Whether the item currently participates in focus search and activation.
    fn is_enabled(&self) -> bool;

    /// Whether the item currently has focus.
    fn is_focused(&self) -> bool;

    /// Give or take focus.
    ///
    /// Implement this to drive whatever visual treatment marks the item as
    /// focused; without one the user cannot tell where focus is.
    fn set_focused(&mut self, focused: bool);

    /// Restart the focus presentation without losing focus.
    ///
    /// Called when a focus-seeking operation lands on the item that is already
    /// focused, e.g. a redundant find-first. The default does nothing.
    fn reset_focus(&mut self) {}

    /// Whether the item is interested in the direction of the user's pan
    /// while it has focus. A volume dial is; a plain button is not.
    ///
    /// The default is `false`.
    fn wants_angle_of_touch(&self) -> bool {
        false
    }

    /// Whether the item currently claims the pan stream for itself.
    ///
    /// While this returns `true` for the focused item, the menu stops moving
    /// focus and delivers raw angle samples through
    /// [`set_angle_of_touch`](Self::set_angle_of_touch) instead. An activated
    /// dial returns `true` here until a second activation releases it.
    ///
    /// The default is `false`.
    fn wants_control_of_touch(&self) -> bool {
        false
    }

    /// Receive the direction of the user's pan, in degrees clockwise from
    /// north. `first` marks the first sample of a gesture, `last` the final
    /// one delivered as the gesture ends.
    ///
    /// The touchpad has no meaningful coordinate system, so only the angle is
    /// reported; an item can project it onto its own geometry (e.g. a point on
    /// a circle around its center) to recover a touch position. The default
    /// discards the sample.
    fn set_angle_of_touch(&mut self, angle_deg: f64, first: bool, last: bool) {
        let _ = (angle_deg, first, last);
    }

    /// Activate the item, as a click on it would.
    fn activate(&mut self);

    /// The item's location in the menu's coordinate space (y-up).
    ///
    /// Placement belongs to the host scene graph; selection only reads it.
    fn position(&self) -> Point;
}

impl<T: FocusableItem + ?Sized> FocusableItem for Box<T> {
    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }

    fn is_focused(&self) -> bool {
        (**self).is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        (**self).set_focused(focused);
    }

    fn reset_focus(&mut self) {
        (**self).reset_focus();
    }

    fn wants_angle_of_touch(&self) -> bool {
        (**self).wants_angle_of_touch()
    }

    fn wants_control_of_touch(&self) -> bool {
        (**self).wants_control_of_touch()
    }

    fn set_angle_of_touch(&mut self, angle_deg: f64, first: bool, last: bool) {
        (**self).set_angle_of_touch(angle_deg, first, last);
    }

    fn activate(&mut self) {
        (**self).activate();
    }

    fn position(&self) -> Point {
        (**self).position()
    }
}

bitflags::bitflags! {
    /// Item flags backing the boolean half of the [`FocusableItem`] contract.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ItemFlags: u8 {
        /// Item participates in focus search and activation.
        const ENABLED = 0b0000_0001;
        /// Item currently has focus.
        const FOCUSED = 0b0000_0010;
        /// Item is interested in pan angles while focused.
        const WANTS_ANGLE = 0b0000_0100;
        /// Item currently claims the pan stream for itself.
        const CONTROLS_TOUCH = 0b0000_1000;
    }
}

impl Default for ItemFlags {
    fn default() -> Self {
        Self::ENABLED
    }
}

/// Reusable state carrier for [`FocusableItem`] implementors.
///
/// Concrete items can embed one of these and delegate the trait's getters and
/// setters to it, keeping their own code to the parts that actually differ:
/// `activate`, focus presentation, and angle handling.
#[derive(Clone, Copy, Debug, Default)]
pub struct ItemState {
    /// Enabled/focused/angle-interest flags.
    pub flags: ItemFlags,
    /// Location in the menu's coordinate space (y-up).
    pub position: Point,
}

impl ItemState {
    /// Create a state carrier at `position` with default flags (enabled).
    pub fn new(position: Point) -> Self {
        Self {
            flags: ItemFlags::default(),
            position,
        }
    }

    /// Whether the `ENABLED` flag is set.
    pub fn is_enabled(&self) -> bool {
        self.flags.contains(ItemFlags::ENABLED)
    }

    /// Set or clear the `ENABLED` flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.flags.set(ItemFlags::ENABLED, enabled);
    }

    /// Whether the `FOCUSED` flag is set.
    pub fn is_focused(&self) -> bool {
        self.flags.contains(ItemFlags::FOCUSED)
    }

    /// Set or clear the `FOCUSED` flag.
    pub fn set_focused(&mut self, focused: bool) {
        self.flags.set(ItemFlags::FOCUSED, focused);
    }

    /// Whether the `WANTS_ANGLE` flag is set.
    pub fn wants_angle_of_touch(&self) -> bool {
        self.flags.contains(ItemFlags::WANTS_ANGLE)
    }

    /// Whether the `CONTROLS_TOUCH` flag is set.
    pub fn wants_control_of_touch(&self) -> bool {
        self.flags.contains(ItemFlags::CONTROLS_TOUCH)
    }

    /// Set or clear the `CONTROLS_TOUCH` flag.
    pub fn set_controls_touch(&mut self, controls: bool) {
        self.flags.set(ItemFlags::CONTROLS_TOUCH, controls);
    }
}

/// A single focusable candidate in a selection snapshot.
///
/// Built by the host menu from its children each time selection runs; the
/// designated back item is never included. All entries in a snapshot share one
/// coordinate space, and slice order is insertion order.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<K> {
    /// Identifier for this item.
    pub id: K,
    /// Position in the snapshot's coordinate space (y-up).
    pub position: Point,
    /// Whether this item is enabled for focus.
    pub enabled: bool,
}

/// Direction of a translation vector, in degrees clockwise from north.
///
/// Returns a value in `[0, 360)`. The zero vector has no direction; callers
/// are expected not to ask.
pub fn pan_angle(v: Vec2) -> f64 {
    // atan2 measures CCW from +x; convert to CW from +y (north).
    let theta = v.atan2().to_degrees();
    let mut angle = (90.0 - theta) % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

/// Absolute difference between two angles in degrees, folded to `[0, 180]`.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let mut d = (a - b) % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    if d > 180.0 { 360.0 - d } else { d }
}

/// Angular focus selection policy.
///
/// Given the current focus, a candidate snapshot, and a pan direction, picks
/// the next focus target: the closest enabled candidate whose direction from
/// the reference point lies within [`tolerance_deg`](Self::tolerance_deg) of
/// the pan angle.
#[derive(Copy, Clone, Debug)]
pub struct AngularPolicy {
    /// Qualifying half-angle around the pan direction, in degrees.
    pub tolerance_deg: f64,
}

impl Default for AngularPolicy {
    fn default() -> Self {
        Self {
            tolerance_deg: ANGULAR_TOLERANCE_DEG,
        }
    }
}

impl AngularPolicy {
    /// Select the next focus target for a pan in the given direction.
    ///
    /// The reference point is the current item's position, or the origin when
    /// there is no current focus (or it is absent from the snapshot). A
    /// candidate qualifies when it is enabled, is not the current item, and
    /// its position-angle from the reference point is within the tolerance of
    /// `pan_angle_deg` (wraparound folded). Among qualifiers the winner has
    /// the minimum Euclidean distance; ties break by smaller angular
    /// difference, then by earliest slice position.
    ///
    /// Returns `None` when nothing qualifies — a pan that matches no item
    /// moves no focus.
    pub fn select<K: Copy + Eq>(
        &self,
        current: Option<K>,
        candidates: &[Candidate<K>],
        pan_angle_deg: f64,
    ) -> Option<K> {
        let origin = current
            .and_then(|cur| candidates.iter().find(|e| e.id == cur))
            .map_or(Point::ORIGIN, |e| e.position);

        let mut best: Option<(usize, f64, f64)> = None;
        for (i, cand) in candidates.iter().enumerate() {
            if !cand.enabled || current == Some(cand.id) {
                continue;
            }
            let v = cand.position - origin;
            let dist2 = v.hypot2();
            if dist2 == 0.0 {
                // Coincident with the reference point: no direction to match.
                continue;
            }
            let diff = angular_difference(pan_angle(v), pan_angle_deg);
            if diff > self.tolerance_deg {
                continue;
            }
            let closer = match best {
                None => true,
                Some((_, best_d2, best_diff)) => {
                    dist2 < best_d2 || (dist2 == best_d2 && diff < best_diff)
                }
            };
            if closer {
                best = Some((i, dist2, diff));
            }
        }
        best.map(|(i, _, _)| candidates[i].id)
    }
}

/// First enabled candidate in slice order.
pub fn first_enabled<K: Copy>(candidates: &[Candidate<K>]) -> Option<K> {
    candidates.iter().find(|e| e.enabled).map(|e| e.id)
}

/// Next enabled candidate strictly after `current` in slice order, wrapping
/// past the end.
///
/// The current item itself never qualifies, so a snapshot whose only enabled
/// entry is the current focus yields `None`. Without a current focus (or when
/// it is absent from the snapshot) this falls back to [`first_enabled`].
pub fn next_enabled<K: Copy + Eq>(current: Option<K>, candidates: &[Candidate<K>]) -> Option<K> {
    let Some(cur) = current else {
        return first_enabled(candidates);
    };
    let Some(pos) = candidates.iter().position(|e| e.id == cur) else {
        return first_enabled(candidates);
    };
    let n = candidates.len();
    for step in 1..n {
        let e = &candidates[(pos + step) % n];
        if e.enabled && e.id != cur {
            return Some(e.id);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cross(radius: f64) -> [Candidate<u32>; 5] {
        // Current item at the origin with neighbors on the compass points.
        [
            Candidate {
                id: 0,
                position: Point::ZERO,
                enabled: true,
            },
            Candidate {
                id: 1,
                position: Point::new(0.0, radius),
                enabled: true,
            },
            Candidate {
                id: 2,
                position: Point::new(radius, 0.0),
                enabled: true,
            },
            Candidate {
                id: 3,
                position: Point::new(0.0, -radius),
                enabled: true,
            },
            Candidate {
                id: 4,
                position: Point::new(-radius, 0.0),
                enabled: true,
            },
        ]
    }

    // Transcendental round-trips are not exact; compare on the circle.
    fn assert_angle_near(actual: f64, expected: f64) {
        assert!(
            angular_difference(actual, expected) < 1e-9,
            "angle {actual} not near {expected}"
        );
    }

    #[test]
    fn pan_angle_compass_points() {
        assert_angle_near(pan_angle(Vec2::new(0.0, 1.0)), 0.0);
        assert_angle_near(pan_angle(Vec2::new(1.0, 0.0)), 90.0);
        assert_angle_near(pan_angle(Vec2::new(0.0, -1.0)), 180.0);
        assert_angle_near(pan_angle(Vec2::new(-1.0, 0.0)), 270.0);
        assert_angle_near(pan_angle(Vec2::new(1.0, 1.0)), 45.0);
    }

    #[test]
    fn angular_difference_folds_wraparound() {
        assert_eq!(angular_difference(10.0, 350.0), 20.0);
        assert_eq!(angular_difference(350.0, 10.0), 20.0);
        assert_eq!(angular_difference(0.0, 180.0), 180.0);
        assert_eq!(angular_difference(92.0, 90.0), 2.0);
    }

    #[test]
    fn cross_pan_near_east_selects_east() {
        let items = cross(50.0);
        let policy = AngularPolicy::default();
        assert_eq!(policy.select(Some(0), &items, 92.0), Some(2));
    }

    #[test]
    fn cross_pan_between_items_selects_nothing() {
        let items = cross(50.0);
        let policy = AngularPolicy::default();
        // 120° is 30° from east and 60° from south: outside tolerance of both.
        assert_eq!(policy.select(Some(0), &items, 120.0), None);
    }

    #[test]
    fn select_skips_disabled_candidates() {
        let mut items = cross(50.0);
        items[2].enabled = false;
        let policy = AngularPolicy::default();
        assert_eq!(policy.select(Some(0), &items, 90.0), None);
    }

    #[test]
    fn select_prefers_closer_candidate_in_same_direction() {
        let items = vec![
            Candidate {
                id: 0_u32,
                position: Point::ZERO,
                enabled: true,
            },
            Candidate {
                id: 1,
                position: Point::new(100.0, 0.0),
                enabled: true,
            },
            Candidate {
                id: 2,
                position: Point::new(40.0, 0.0),
                enabled: true,
            },
        ];
        let policy = AngularPolicy::default();
        assert_eq!(policy.select(Some(0), &items, 90.0), Some(2));
    }

    #[test]
    fn select_breaks_distance_tie_by_angular_difference() {
        // (30, 40) and (40, 30) are exactly equidistant from the origin; the
        // pan direction sits closer to the second (≈53.1°) than the first
        // (≈36.9°).
        let items = vec![
            Candidate {
                id: 0_u32,
                position: Point::ZERO,
                enabled: true,
            },
            Candidate {
                id: 1,
                position: Point::new(30.0, 40.0),
                enabled: true,
            },
            Candidate {
                id: 2,
                position: Point::new(40.0, 30.0),
                enabled: true,
            },
        ];
        let policy = AngularPolicy::default();
        assert_eq!(policy.select(Some(0), &items, 50.0), Some(2));
    }

    #[test]
    fn select_without_current_measures_from_origin() {
        let items = vec![
            Candidate {
                id: 1_u32,
                position: Point::new(0.0, 30.0),
                enabled: true,
            },
            Candidate {
                id: 2,
                position: Point::new(30.0, 0.0),
                enabled: true,
            },
        ];
        let policy = AngularPolicy::default();
        assert_eq!(policy.select(None, &items, 0.0), Some(1));
        assert_eq!(policy.select(None, &items, 90.0), Some(2));
    }

    #[test]
    fn select_on_empty_snapshot_is_none() {
        let policy = AngularPolicy::default();
        let items: [Candidate<u32>; 0] = [];
        assert_eq!(policy.select(None, &items, 90.0), None);
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        let items = vec![
            Candidate {
                id: 0_u32,
                position: Point::ZERO,
                enabled: true,
            },
            Candidate {
                id: 1,
                position: Point::new(50.0, 0.0),
                enabled: true,
            },
        ];
        let policy = AngularPolicy::default();
        // Candidate sits at exactly 90°; a pan at 115° differs by exactly 25°.
        assert_eq!(policy.select(Some(0), &items, 115.0), Some(1));
        assert_eq!(policy.select(Some(0), &items, 115.1), None);
    }

    #[test]
    fn first_enabled_skips_disabled_prefix() {
        let items = vec![
            Candidate {
                id: 1_u32,
                position: Point::ZERO,
                enabled: false,
            },
            Candidate {
                id: 2,
                position: Point::new(10.0, 0.0),
                enabled: true,
            },
        ];
        assert_eq!(first_enabled(&items), Some(2));
    }

    #[test]
    fn next_enabled_wraps_past_the_end() {
        let items = vec![
            Candidate {
                id: 1_u32,
                position: Point::ZERO,
                enabled: true,
            },
            Candidate {
                id: 2,
                position: Point::new(10.0, 0.0),
                enabled: false,
            },
            Candidate {
                id: 3,
                position: Point::new(20.0, 0.0),
                enabled: true,
            },
        ];
        assert_eq!(next_enabled(Some(3), &items), Some(1));
        assert_eq!(next_enabled(Some(1), &items), Some(3));
    }

    #[test]
    fn next_enabled_excludes_the_current_item() {
        let items = vec![Candidate {
            id: 1_u32,
            position: Point::ZERO,
            enabled: true,
        }];
        assert_eq!(next_enabled(Some(1), &items), None);
    }

    #[test]
    fn next_enabled_without_current_is_first() {
        let items = vec![
            Candidate {
                id: 7_u32,
                position: Point::ZERO,
                enabled: true,
            },
            Candidate {
                id: 8,
                position: Point::new(10.0, 0.0),
                enabled: true,
            },
        ];
        assert_eq!(next_enabled(None, &items), Some(7));
    }

    #[test]
    fn item_state_flag_round_trip() {
        let mut state = ItemState::new(Point::new(5.0, 5.0));
        assert!(state.is_enabled());
        assert!(!state.is_focused());
        state.set_focused(true);
        state.set_enabled(false);
        assert!(state.is_focused());
        assert!(!state.is_enabled());
        state.set_controls_touch(true);
        assert!(state.wants_control_of_touch());
    }
}
